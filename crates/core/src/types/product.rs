//! Catalog product types.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Average review score and how many reviews it is based on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0.0 to 5.0.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

/// A catalog product.
///
/// Products are immutable once fetched. Cart lines hold a copy, so the price a
/// line was added at is the price it is totalled at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price (never negative).
    pub price: Price,
    /// Long-form description, searched by the free-text query.
    pub description: String,
    /// Free-text category label (e.g., "electronics").
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Review summary.
    pub rating: Rating,
}

impl Product {
    /// Price of `quantity` units of this product, or `None` on overflow.
    #[must_use]
    pub fn line_price(&self, quantity: u32) -> Option<Price> {
        self.price.checked_times(quantity)
    }
}
