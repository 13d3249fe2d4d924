//! Shopper identity.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;

/// An authenticated shopper.
///
/// This is the record persisted in the session store under the `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Email address used to sign in.
    pub email: Email,
    /// Display name ("Hello, {name}").
    pub name: String,
}
