//! Cart store.

use shopfront_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::models::Cart;

/// Mutations of the cart store.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product.
    Add(Product),
    /// Drop a product's line.
    Remove(ProductId),
    /// Set a line's quantity exactly; 0 removes it.
    SetQuantity { product_id: ProductId, quantity: u32 },
    /// Empty the cart.
    Clear,
}

/// Apply a cart action.
#[must_use]
pub fn reduce(mut cart: Cart, action: CartAction) -> Cart {
    match action {
        CartAction::Add(product) => cart.add(product),
        CartAction::Remove(product_id) => cart.remove(product_id),
        CartAction::SetQuantity {
            product_id,
            quantity,
        } => cart.set_quantity(product_id, quantity),
        CartAction::Clear => cart.clear(),
    }
    cart
}

/// Validate a raw quantity input before it becomes a [`CartAction`].
///
/// # Errors
///
/// Returns `AppError::ValidationFailed` for negative or oversized input.
pub fn parse_quantity(raw: i64) -> Result<u32> {
    if raw < 0 {
        return Err(AppError::validation("Quantity cannot be negative"));
    }
    u32::try_from(raw).map_err(|_| AppError::validation("Quantity is too large"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::cart::tests::product;

    fn id(n: i64) -> ProductId {
        ProductId::new(n)
    }

    fn assert_totals_are_fold(cart: &Cart) {
        let items: u32 = cart.lines().iter().map(|l| l.quantity).sum();
        let amount: Decimal = cart.lines().iter().map(|l| l.line_total()).sum();
        assert_eq!(cart.total_items(), items);
        assert_eq!(cart.total_amount(), amount);
        assert!(cart.lines().iter().all(|l| l.quantity > 0));
    }

    #[test]
    fn test_scenario_totals() {
        let a = product(1, Decimal::from(100));
        let b = product(2, Decimal::from(50));
        let cart = [
            CartAction::Add(a.clone()),
            CartAction::Add(a),
            CartAction::Add(b),
        ]
        .into_iter()
        .fold(Cart::new(), reduce);

        assert_eq!(cart.total_amount(), Decimal::from(250));
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_totals_hold_after_every_action() {
        let actions = vec![
            CartAction::Add(product(1, Decimal::new(1099, 2))),
            CartAction::Add(product(2, Decimal::new(2230, 2))),
            CartAction::Add(product(1, Decimal::new(1099, 2))),
            CartAction::SetQuantity {
                product_id: id(2),
                quantity: 5,
            },
            CartAction::Add(product(3, Decimal::from(7))),
            CartAction::Remove(id(1)),
            CartAction::SetQuantity {
                product_id: id(9),
                quantity: 4,
            },
            CartAction::SetQuantity {
                product_id: id(3),
                quantity: 0,
            },
            CartAction::Add(product(1, Decimal::new(1099, 2))),
            CartAction::Remove(id(42)),
        ];

        let mut cart = Cart::new();
        for action in actions {
            cart = reduce(cart, action);
            assert_totals_are_fold(&cart);
        }
        assert_eq!(cart.total_items(), 6);
        assert_eq!(cart.total_amount(), Decimal::new(12249, 2));

        let cart = reduce(cart, CartAction::Clear);
        assert!(cart.is_empty());
        assert_eq!(cart.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_add_existing_increments_by_one() {
        let p = product(1, Decimal::from(10));
        let cart = reduce(Cart::new(), CartAction::Add(p.clone()));
        let cart = reduce(
            cart,
            CartAction::SetQuantity {
                product_id: id(1),
                quantity: 4,
            },
        );
        let cart = reduce(cart, CartAction::Add(p));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(id(1)).unwrap().quantity, 5);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let start = [
            CartAction::Add(product(1, Decimal::from(10))),
            CartAction::Add(product(2, Decimal::from(20))),
        ]
        .into_iter()
        .fold(Cart::new(), reduce);

        let zeroed = reduce(
            start.clone(),
            CartAction::SetQuantity {
                product_id: id(1),
                quantity: 0,
            },
        );
        let removed = reduce(start, CartAction::Remove(id(1)));
        assert_eq!(zeroed, removed);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(0).unwrap(), 0);
        assert_eq!(parse_quantity(3).unwrap(), 3);
        assert!(matches!(
            parse_quantity(-1),
            Err(AppError::ValidationFailed(_))
        ));
        assert!(matches!(
            parse_quantity(i64::MAX),
            Err(AppError::ValidationFailed(_))
        ));
    }
}
