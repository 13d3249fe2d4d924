//! Mock credential source.
//!
//! Stands in for a login/signup backend. Login accepts exactly one demo
//! credential pair; signup accepts anything with all three fields filled in and
//! mints the user id from the current timestamp. Nothing is hashed, stored or
//! checked for uniqueness.

mod error;

pub use error::AuthError;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};
use uuid::Uuid;

use shopfront_core::{Email, User, UserId};

use crate::config::DemoAccount;

/// ID of the demo account.
const DEMO_USER_ID: i64 = 1;

/// Display name of the demo account.
const DEMO_USER_NAME: &str = "Demo User";

/// A signed-in user plus the opaque token to persist alongside it.
#[derive(Debug, Clone)]
pub struct AuthGrant {
    pub user: User,
    pub token: SecretString,
}

/// Backend that checks credentials and registers new users.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Check an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the pair is not accepted.
    async fn login(&self, email: &str, password: &SecretString) -> Result<AuthGrant, AuthError>;

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is blank and
    /// `AuthError::InvalidEmail` if the email is malformed.
    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthGrant, AuthError>;
}

/// In-process credential source with an artificial delay.
#[derive(Debug, Clone)]
pub struct MockAuthService {
    delay: Duration,
    demo: DemoAccount,
}

impl MockAuthService {
    /// Create a mock that accepts `demo` and sleeps `delay` on every call.
    #[must_use]
    pub const fn new(delay: Duration, demo: DemoAccount) -> Self {
        Self { delay, demo }
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl CredentialSource for MockAuthService {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &str, password: &SecretString) -> Result<AuthGrant, AuthError> {
        self.simulate_latency().await;

        let matches = email == self.demo.email
            && password.expose_secret() == self.demo.password.expose_secret();
        if !matches {
            debug!("Rejected login");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthGrant {
            user: User {
                id: UserId::new(DEMO_USER_ID),
                email: Email::parse(&self.demo.email)?,
                name: DEMO_USER_NAME.to_string(),
            },
            token: mint_token(),
        })
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthGrant, AuthError> {
        self.simulate_latency().await;

        if name.trim().is_empty() || email.trim().is_empty() || password.expose_secret().is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        let user = User {
            id: UserId::new(chrono::Utc::now().timestamp_millis()),
            email: Email::parse(email)?,
            name: name.trim().to_string(),
        };
        debug!(user_id = %user.id, "Registered user");

        Ok(AuthGrant {
            user,
            token: mint_token(),
        })
    }
}

/// Opaque session token. Not signed, not verified anywhere.
fn mint_token() -> SecretString {
    SecretString::from(format!("demo-{}", Uuid::new_v4().simple()))
}
