//! Unified error handling with Sentry integration.
//!
//! Every fallible storefront operation returns `Result<T, AppError>`. Errors
//! are recovered at the boundary where they occur: the caller shows
//! [`AppError::user_message`] and calls [`AppError::report`], nothing is fatal.

use thiserror::Error;

use crate::services::auth::AuthError;
use crate::services::catalog::CatalogError;
use crate::services::checkout::CheckoutError;
use crate::services::storage::StorageError;

/// Message shown when a catalog fetch fails without a usable reason.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products";

/// Message shown when checkout fails.
pub const CHECKOUT_FAILED_MESSAGE: &str = "Failed to process order. Please try again.";

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The catalog could not be loaded.
    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] CatalogError),

    /// The credential pair was rejected.
    #[error("Auth failed: {0}")]
    AuthFailed(AuthError),

    /// A form field or signup input violated a constraint.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The gateway did not accept the order.
    #[error("Checkout failed: {0}")]
    CheckoutFailed(#[from] CheckoutError),

    /// The session persistence shim failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::AuthFailed(err),
            AuthError::MissingFields | AuthError::InvalidEmail(_) => {
                Self::ValidationFailed(err.to_string())
            }
        }
    }
}

impl AppError {
    /// Shorthand for a form constraint violation.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }

    /// Text to show the shopper.
    ///
    /// Storage details are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::FetchFailed(CatalogError::Unavailable(reason)) if !reason.trim().is_empty() => {
                reason.clone()
            }
            Self::FetchFailed(_) => FETCH_FAILED_MESSAGE.to_string(),
            Self::AuthFailed(err) => err.to_string(),
            Self::ValidationFailed(msg) => msg.clone(),
            Self::CheckoutFailed(_) => CHECKOUT_FAILED_MESSAGE.to_string(),
            Self::Storage(_) => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Log the error and, for failures the shopper did not cause, capture it
    /// to Sentry.
    pub fn report(&self) {
        if matches!(self, Self::Storage(_) | Self::FetchFailed(_) | Self::CheckoutFailed(_)) {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Operation failed"
            );
        } else {
            tracing::info!(error = %self, "Rejected input");
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for shopper actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added item", Some(&[("product_id", "2")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
