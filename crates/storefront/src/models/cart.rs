//! Cart and checkout summary types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use shopfront_core::{CurrencyCode, Price, Product, ProductId};

/// One product in the cart and how many of it.
///
/// Quantity is never zero: a line set to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product as it was when added; its price is what the line is totalled at.
    pub product: Product,
    /// Units of the product, at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    ///
    /// Lines held by a [`Cart`] always fit; a standalone line that overflows
    /// reports `Decimal::MAX`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.checked_line_total().unwrap_or(Decimal::MAX)
    }

    fn checked_line_total(&self) -> Option<Decimal> {
        self.product.line_price(self.quantity).map(|p| p.amount)
    }
}

/// The shopper's cart.
///
/// Lines keep insertion order and are unique per product id. `total_items` and
/// `total_amount` are recomputed from the lines after every mutation, so they
/// always equal the fold over the current lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    total_items: u32,
    total_amount: Decimal,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lines, in the order products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of line quantities.
    #[must_use]
    pub const fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `product_id`, if any.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Add one unit of `product`: bump an existing line or append a new one.
    ///
    /// Ignored if the cart totals would overflow.
    pub fn add(&mut self, product: Product) {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                let Some(quantity) = line.quantity.checked_add(1) else {
                    warn!(product_id = %product.id, "Line quantity at maximum");
                    return;
                };
                line.quantity = quantity;
            }
            None => lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
        self.commit(lines);
    }

    /// Remove the line for `product_id`. No-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        let lines = self
            .lines
            .iter()
            .filter(|l| l.product.id != product_id)
            .cloned()
            .collect();
        self.commit(lines);
    }

    /// Set the quantity of an existing line exactly. Zero removes the line;
    /// an unknown product id is a no-op. Ignored if the cart totals would
    /// overflow.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        let mut lines = self.lines.clone();
        if let Some(line) = lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
        self.commit(lines);
    }

    /// Drop every line and zero the totals.
    pub fn clear(&mut self) {
        self.commit(Vec::new());
    }

    /// Replace the lines if their totals fit, keeping the cart as it was
    /// otherwise.
    fn commit(&mut self, lines: Vec<CartLine>) {
        let Some((items, amount)) = totals(&lines) else {
            warn!(lines = lines.len(), "Cart totals out of range; change ignored");
            return;
        };
        self.lines = lines;
        self.total_items = items;
        self.total_amount = amount;
    }
}

fn totals(lines: &[CartLine]) -> Option<(u32, Decimal)> {
    lines.iter().try_fold((0u32, Decimal::ZERO), |(items, amount), line| {
        Some((
            items.checked_add(line.quantity)?,
            amount.checked_add(line.checked_line_total()?)?,
        ))
    })
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// One row of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

/// What the shopper is shown before confirming an order.
///
/// Computed on demand from the cart; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub item_count: u32,
    /// Sum of price × quantity.
    pub subtotal: Price,
    /// Subtotal × tax rate.
    pub tax: Price,
    /// Subtotal × (1 + tax rate). No shipping charge.
    pub total: Price,
}

impl CheckoutSummary {
    /// Build the summary for `cart` with a flat `tax_rate` (e.g., 0.10).
    #[must_use]
    pub fn from_cart(cart: &Cart, tax_rate: Decimal, currency: CurrencyCode) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|l| LineSummary {
                product_id: l.product.id,
                title: l.product.title.clone(),
                quantity: l.quantity,
                unit_price: Price::new(l.product.price.amount, currency),
                line_total: Price::new(l.line_total(), currency),
            })
            .collect();

        let subtotal = cart.total_amount();

        Self {
            lines,
            item_count: cart.total_items(),
            subtotal: Price::new(subtotal, currency),
            tax: Price::new(subtotal.saturating_mul(tax_rate), currency),
            total: Price::new(
                subtotal.saturating_mul(Decimal::ONE + tax_rate),
                currency,
            ),
        }
    }

    /// Number of distinct products.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
