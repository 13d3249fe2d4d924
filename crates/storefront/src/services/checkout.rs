//! Mock order placement.
//!
//! Checkout is one-shot: the gateway either accepts the whole order or rejects
//! it. There is no retry and no partial commit.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use shopfront_core::Price;

use crate::models::CheckoutSummary;

/// Errors the gateway can return.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The order was not accepted.
    #[error("order rejected: {0}")]
    Rejected(String),
}

/// Receipt for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    /// Amount charged, tax included.
    pub total: Price,
    pub item_count: u32,
    pub placed_at: DateTime<Utc>,
}

/// Backend that accepts orders.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Place an order for everything in `summary`.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Rejected` if the order is not accepted.
    async fn place_order(&self, summary: &CheckoutSummary) -> Result<OrderConfirmation, CheckoutError>;
}

/// Whether the mock gateway accepts orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayMode {
    #[default]
    Accept,
    Reject,
}

/// In-process gateway with an artificial delay.
#[derive(Debug, Clone)]
pub struct MockCheckout {
    delay: Duration,
    mode: GatewayMode,
}

impl MockCheckout {
    /// A gateway that accepts every order after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            mode: GatewayMode::Accept,
        }
    }

    /// Same gateway in the given mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: GatewayMode) -> Self {
        self.mode = mode;
        self
    }
}

#[async_trait]
impl CheckoutGateway for MockCheckout {
    #[instrument(skip(self, summary), fields(items = summary.item_count, total = %summary.total))]
    async fn place_order(&self, summary: &CheckoutSummary) -> Result<OrderConfirmation, CheckoutError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.mode == GatewayMode::Reject {
            return Err(CheckoutError::Rejected("simulated gateway failure".to_string()));
        }

        let confirmation = OrderConfirmation {
            order_id: Uuid::new_v4(),
            total: summary.total,
            item_count: summary.item_count,
            placed_at: Utc::now(),
        };
        info!(order_id = %confirmation.order_id, "Order placed");
        Ok(confirmation)
    }
}
