//! Sign-in lifecycle: hydrate, login, signup, logout.
//!
//! The credential check is a demo fixture. The token is persisted in plain
//! text and never verified. None of this is fit for production use.

use tracing::{info, instrument, warn};

use shopfront_core::User;

use crate::error::{self, Result};
use crate::forms::{LoginForm, SignupForm};
use crate::services::auth::AuthGrant;
use crate::services::storage::StorageError;
use crate::state::AppState;
use crate::store::SessionAction;

/// Restore the session persisted by a previous run.
///
/// A corrupt user record is discarded and the session starts signed out.
///
/// # Errors
///
/// Returns `AppError::Storage` if the backend cannot be read. The session is
/// left signed out.
#[instrument(skip(state))]
pub fn hydrate(state: &AppState) -> Result<Option<User>> {
    let user = match state.storage().load_auth() {
        Ok(persisted) => persisted.user,
        Err(StorageError::Serialization(e)) => {
            warn!(error = %e, "Discarding unreadable persisted session");
            if let Err(e) = state.storage().clear_auth() {
                warn!(error = %e, "Failed to clear persisted session");
            }
            None
        }
        Err(e) => {
            state.dispatch(SessionAction::Hydrated(None));
            return Err(e.into());
        }
    };

    if let Some(user) = &user {
        error::set_sentry_user(&user.id, Some(user.email.as_str()));
        info!(user_id = %user.id, "Session restored");
    }
    state.dispatch(SessionAction::Hydrated(user.clone()));
    Ok(user)
}

/// Sign in with the login form.
///
/// # Errors
///
/// Returns `AppError::ValidationFailed` for a bad form, `AppError::AuthFailed`
/// for a rejected pair, and `AppError::Storage` if the session cannot be
/// persisted. The session stays signed out on every error.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(state: &AppState, form: &LoginForm) -> Result<User> {
    form.validate()?;

    // The credential check sees the email exactly as typed.
    state.dispatch(SessionAction::SetLoading(true));
    let result = state.auth().login(&form.email, &form.password).await;
    state.dispatch(SessionAction::SetLoading(false));

    establish(state, result?)
}

/// Register with the signup form and sign in as the new user.
///
/// # Errors
///
/// Returns `AppError::ValidationFailed` for a bad form and `AppError::Storage`
/// if the session cannot be persisted.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn signup(state: &AppState, form: &SignupForm) -> Result<User> {
    let email = form.validate()?;

    state.dispatch(SessionAction::SetLoading(true));
    let result = state
        .auth()
        .signup(form.name.trim(), email.as_str(), &form.password)
        .await;
    state.dispatch(SessionAction::SetLoading(false));

    establish(state, result?)
}

/// Sign out and forget the persisted session.
///
/// The in-memory session is cleared even if storage fails.
///
/// # Errors
///
/// Returns `AppError::Storage` if the persisted keys cannot be removed.
#[instrument(skip(state))]
pub fn logout(state: &AppState) -> Result<()> {
    state.dispatch(SessionAction::LoggedOut);
    error::clear_sentry_user();
    state.storage().clear_auth()?;
    info!("Signed out");
    Ok(())
}

/// Persist a grant, then mark the session signed in.
fn establish(state: &AppState, grant: AuthGrant) -> Result<User> {
    let AuthGrant { user, token } = grant;
    state.storage().save_auth(&user, &token)?;

    error::set_sentry_user(&user.id, Some(user.email.as_str()));
    error::add_breadcrumb("auth", "Signed in", None);
    state.dispatch(SessionAction::LoggedIn(user.clone()));
    info!(user_id = %user.id, "Signed in");
    Ok(user)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use shopfront_core::UserId;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::error::AppError;
    use crate::models::session::keys;
    use crate::services::storage::tests::FailingKeyStore;
    use crate::services::storage::{FileStore, KeyValueStore, MemoryStore};
    use crate::state::Services;

    fn state_with(storage: Arc<dyn KeyValueStore>) -> AppState {
        let config = StorefrontConfig::default().without_delays();
        let mut services = Services::mock(&config);
        services.storage = storage;
        AppState::with_services(config, services)
    }

    fn state_over(storage: Arc<MemoryStore>) -> AppState {
        state_with(storage)
    }

    fn demo_login() -> LoginForm {
        LoginForm::new("demo@example.com", "password")
    }

    #[tokio::test]
    async fn test_login_persists_and_authenticates() {
        let storage = Arc::new(MemoryStore::new());
        let state = state_over(Arc::clone(&storage));

        let user = login(&state, &demo_login()).await.unwrap();
        assert_eq!(user.id, UserId::new(1));
        state.read(|s| {
            assert!(s.session.is_authenticated());
            assert!(!s.session.loading);
        });
        assert!(storage.get(keys::USER).unwrap().is_some());
        assert!(storage.get(keys::TOKEN).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_bad_login_stays_signed_out() {
        let state = state_over(Arc::new(MemoryStore::new()));
        let err = login(&state, &LoginForm::new("demo@example.com", "nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthFailed(_)));
        assert_eq!(err.user_message(), "Invalid credentials");
        state.read(|s| {
            assert!(!s.session.is_authenticated());
            assert!(!s.session.loading);
        });
    }

    #[tokio::test]
    async fn test_invalid_form_skips_backend() {
        let state = state_over(Arc::new(MemoryStore::new()));
        let err = login(&state, &LoginForm::new("", "password")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn test_hydrate_restores_previous_run() {
        let storage = Arc::new(MemoryStore::new());
        login(&state_over(Arc::clone(&storage)), &demo_login())
            .await
            .unwrap();

        let next_run = state_over(storage);
        let user = hydrate(&next_run).unwrap().unwrap();
        assert_eq!(user.name, "Demo User");
        next_run.read(|s| assert!(s.session.is_authenticated()));
    }

    #[test]
    fn test_hydrate_empty_storage() {
        let state = state_over(Arc::new(MemoryStore::new()));
        assert!(hydrate(&state).unwrap().is_none());
        state.read(|s| assert!(!s.session.is_authenticated()));
    }

    #[test]
    fn test_hydrate_discards_corrupt_record() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::USER, "{\"id\":").unwrap();
        storage.set(keys::TOKEN, "demo-abc").unwrap();

        let state = state_over(Arc::clone(&storage));
        assert!(hydrate(&state).unwrap().is_none());
        assert!(storage.get(keys::USER).unwrap().is_none());
        assert!(storage.get(keys::TOKEN).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_signup_then_logout() {
        let storage = Arc::new(MemoryStore::new());
        let state = state_over(Arc::clone(&storage));

        let form = SignupForm::new("Asha", "asha@example.com", "secret1", "secret1");
        let user = signup(&state, &form).await.unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(state.header().greeting_name.as_deref(), Some("Asha"));

        logout(&state).unwrap();
        state.read(|s| assert!(!s.session.is_authenticated()));
        assert!(storage.get(keys::USER).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_signup_short_password() {
        let state = state_over(Arc::new(MemoryStore::new()));
        let form = SignupForm::new("Asha", "asha@example.com", "abc", "abc");
        assert!(matches!(
            signup(&state, &form).await,
            Err(AppError::ValidationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_login_after_corrupt_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{truncated").unwrap();

        let state = state_with(Arc::new(FileStore::new(&path)));
        assert!(hydrate(&state).unwrap().is_none());

        let user = login(&state, &demo_login()).await.unwrap();
        assert_eq!(user.id, UserId::new(1));
        state.read(|s| assert!(s.session.is_authenticated()));

        let next_run = state_with(Arc::new(FileStore::new(&path)));
        assert_eq!(hydrate(&next_run).unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_failed_persist_is_not_restored() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FailingKeyStore::new(keys::TOKEN));
        let state = state_with(Arc::clone(&storage));

        let err = login(&state, &demo_login()).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        state.read(|s| assert!(!s.session.is_authenticated()));

        let next_run = state_with(storage);
        assert!(hydrate(&next_run).unwrap().is_none());
        next_run.read(|s| assert!(!s.session.is_authenticated()));
    }

    #[tokio::test]
    async fn test_login_email_must_match_exactly() {
        let state = state_over(Arc::new(MemoryStore::new()));
        for email in [" demo@example.com", "demo@example.com ", "Demo@example.com"] {
            let err = login(&state, &LoginForm::new(email, "password"))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::AuthFailed(_)), "{email:?}");
        }
        state.read(|s| assert!(!s.session.is_authenticated()));
    }
}
