//! One-shot checkout.
//!
//! The gateway either accepts the whole order or rejects it. On acceptance
//! the cart is cleared and the view moves back to the catalog; on rejection
//! nothing changes.

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::{self, AppError, Result};
use crate::models::CheckoutSummary;
use crate::routes::Route;
use crate::services::checkout::OrderConfirmation;
use crate::state::AppState;
use crate::store::CartAction;

/// Notice shown after a successful order.
pub const CHECKOUT_SUCCESS_NOTICE: &str = "Order placed successfully! Redirecting to products...";

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutReceipt {
    pub confirmation: OrderConfirmation,
    /// What the shopper was charged for.
    pub summary: CheckoutSummary,
    pub notice: &'static str,
    /// Where to navigate next.
    pub redirect: Route,
}

/// Order summary for the current cart.
#[must_use]
pub fn summary(state: &AppState) -> CheckoutSummary {
    let config = state.config();
    state.read(|s| CheckoutSummary::from_cart(&s.cart, config.tax_rate, config.currency))
}

/// Place an order for everything in the cart.
///
/// # Errors
///
/// Returns `AppError::ValidationFailed` for an empty cart (the gateway is not
/// called) and `AppError::CheckoutFailed` when the gateway rejects the order.
/// The cart is untouched on every error.
#[instrument(skip(state))]
pub async fn place_order(state: &AppState) -> Result<CheckoutReceipt> {
    let summary = summary(state);
    if summary.lines.is_empty() {
        return Err(AppError::validation("Your cart is empty"));
    }

    error::add_breadcrumb("checkout", "Placing order", None);

    let confirmation = match state.checkout().place_order(&summary).await {
        Ok(confirmation) => confirmation,
        Err(e) => {
            let err = AppError::from(e);
            err.report();
            return Err(err);
        }
    };

    state.dispatch(CartAction::Clear);
    info!(
        order_id = %confirmation.order_id,
        total = %confirmation.total,
        "Checkout complete"
    );

    Ok(CheckoutReceipt {
        confirmation,
        summary,
        notice: CHECKOUT_SUCCESS_NOTICE,
        redirect: Route::Products,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use rust_decimal::Decimal;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::error::CHECKOUT_FAILED_MESSAGE;
    use crate::models::cart::tests::product;
    use crate::services::checkout::{GatewayMode, MockCheckout};
    use crate::state::Services;

    fn state_with(mode: GatewayMode) -> AppState {
        let config = StorefrontConfig::default().without_delays();
        let mut services = Services::mock(&config);
        services.checkout = Arc::new(MockCheckout::new(Duration::ZERO).with_mode(mode));
        AppState::with_services(config, services)
    }

    fn fill(state: &AppState) {
        let a = product(1, Decimal::from(100));
        state.dispatch(CartAction::Add(a.clone()));
        state.dispatch(CartAction::Add(a));
        state.dispatch(CartAction::Add(product(2, Decimal::from(50))));
    }

    #[test]
    fn test_summary_includes_tax() {
        let state = state_with(GatewayMode::Accept);
        fill(&state);
        let summary = summary(&state);
        assert_eq!(summary.line_count(), 2);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal.display(), "₹250.00");
        assert_eq!(summary.tax.display(), "₹25.00");
        assert_eq!(summary.total.display(), "₹275.00");
    }

    #[tokio::test]
    async fn test_success_clears_cart_and_redirects() {
        let state = state_with(GatewayMode::Accept);
        fill(&state);

        let receipt = place_order(&state).await.unwrap();
        assert_eq!(receipt.confirmation.total.display(), "₹275.00");
        assert_eq!(receipt.notice, CHECKOUT_SUCCESS_NOTICE);
        assert_eq!(receipt.redirect, Route::Products);
        assert!(state.read(|s| s.cart.is_empty()));
    }

    #[tokio::test]
    async fn test_failure_leaves_cart() {
        let state = state_with(GatewayMode::Reject);
        fill(&state);
        let before = state.snapshot().cart;

        let err = place_order(&state).await.unwrap_err();
        assert!(matches!(err, AppError::CheckoutFailed(_)));
        assert_eq!(err.user_message(), CHECKOUT_FAILED_MESSAGE);
        assert_eq!(state.snapshot().cart, before);
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let state = state_with(GatewayMode::Accept);
        assert!(matches!(
            place_order(&state).await,
            Err(AppError::ValidationFailed(_))
        ));
    }
}
