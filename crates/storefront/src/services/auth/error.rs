//! Authentication error types.

use thiserror::Error;

/// Errors the credential source can return.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair does not match the demo account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// One of name, email or password was left empty.
    #[error("Please fill all fields")]
    MissingFields,

    /// Email is present but not well-formed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] shopfront_core::EmailError),
}
