//! Cart interactions.

use tracing::debug;

use shopfront_core::{Product, ProductId};

use crate::error::{self, Result};
use crate::store::CartAction;
use crate::store::cart::parse_quantity;
use crate::state::AppState;

/// Add one unit of `product`.
pub fn add_to_cart(state: &AppState, product: Product) {
    let id = product.id.to_string();
    error::add_breadcrumb("cart", "Added item", Some(&[("product_id", id.as_str())]));
    debug!(product_id = %id, "Add to cart");
    state.dispatch(CartAction::Add(product));
}

/// Drop a product's line.
pub fn remove_from_cart(state: &AppState, product_id: ProductId) {
    let id = product_id.to_string();
    error::add_breadcrumb("cart", "Removed item", Some(&[("product_id", id.as_str())]));
    state.dispatch(CartAction::Remove(product_id));
}

/// Set a line's quantity from raw input. Zero removes the line.
///
/// # Errors
///
/// Returns `AppError::ValidationFailed` for a negative quantity; the cart is
/// not touched.
pub fn update_quantity(state: &AppState, product_id: ProductId, raw: i64) -> Result<()> {
    let quantity = parse_quantity(raw)?;
    state.dispatch(CartAction::SetQuantity {
        product_id,
        quantity,
    });
    Ok(())
}

/// Empty the cart.
pub fn clear_cart(state: &AppState) {
    error::add_breadcrumb("cart", "Cleared cart", None);
    state.dispatch(CartAction::Clear);
}
