//! Session-related types.
//!
//! The client-held record of who is signed in.

use serde::Serialize;

use shopfront_core::User;

/// Authentication state of the current shopper.
///
/// Created empty at boot, populated from persisted storage or a successful
/// login/signup, cleared on logout. Authenticated exactly when a user is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// A login/signup submission is in flight.
    pub loading: bool,
}

impl SessionState {
    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Name for the header greeting.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

/// Session storage keys.
pub mod keys {
    /// Key for the serialized signed-in user.
    pub const USER: &str = "user";

    /// Key for the opaque session token.
    pub const TOKEN: &str = "token";
}
