//! Search criteria and derived catalog facets.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopfront_core::Product;

/// Query, category and price bounds used to filter the catalog.
///
/// Every field is independently optional; an absent field constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Free text matched case-insensitively against title, description and
    /// category. Empty means no constraint.
    pub query: String,
    /// Exact category label.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
}

impl SearchCriteria {
    /// Whether `product` satisfies every set constraint.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product) && self.matches_category(product) && self.matches_price(product)
    }

    /// True when a category or either price bound is set.
    ///
    /// The free-text query has its own clear control and does not count.
    #[must_use]
    pub const fn has_active_filters(&self) -> bool {
        self.category.is_some() || self.min_price.is_some() || self.max_price.is_some()
    }

    fn matches_query(&self, product: &Product) -> bool {
        let needle = self.query.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        [&product.title, &product.description, &product.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| product.category == category)
    }

    fn matches_price(&self, product: &Product) -> bool {
        let price = product.price.amount;
        self.min_price.is_none_or(|min| price >= min) && self.max_price.is_none_or(|max| price <= max)
    }
}

/// Lowest and highest price across a product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceBounds {
    /// Bounds of `products`, or `None` for an empty list.
    #[must_use]
    pub fn of(products: &[Product]) -> Option<Self> {
        let mut prices = products.iter().map(|p| p.price.amount);
        let first = prices.next()?;
        Some(prices.fold(Self { min: first, max: first }, |b, p| Self {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }
}

/// Distinct category labels of `products`, sorted.
#[must_use]
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
