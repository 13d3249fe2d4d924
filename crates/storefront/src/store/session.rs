//! Session store.

use shopfront_core::User;

use crate::models::SessionState;

/// Mutations of the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Startup read of persisted storage finished.
    Hydrated(Option<User>),
    /// Login or signup succeeded.
    LoggedIn(User),
    LoggedOut,
    /// A submission started or finished.
    SetLoading(bool),
}

/// Apply a session action.
#[must_use]
pub fn reduce(mut state: SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::Hydrated(user) => {
            state.user = user;
            state.loading = false;
        }
        SessionAction::LoggedIn(user) => state.user = Some(user),
        SessionAction::LoggedOut => state.user = None,
        SessionAction::SetLoading(loading) => state.loading = loading,
    }
    state
}
