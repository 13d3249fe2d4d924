//! Login and signup form input.
//!
//! Validation runs before any submission reaches the credential source, and
//! reports the first violated field.

use secrecy::{ExposeSecret, SecretString};

use shopfront_core::{Email, EmailError};

use crate::error::{AppError, Result};

/// Shortest password the signup form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Login form fields.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Check the fields.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ValidationFailed` naming the first bad field.
    pub fn validate(&self) -> Result<Email> {
        let email = parse_email(&self.email)?;
        if self.password.expose_secret().is_empty() {
            return Err(AppError::validation("Password is required"));
        }
        Ok(email)
    }
}

/// Signup form fields.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SignupForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
        }
    }

    /// Check the fields.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ValidationFailed` naming the first bad field.
    pub fn validate(&self) -> Result<Email> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        let email = parse_email(&self.email)?;

        let password = self.password.expose_secret();
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if password != self.confirm_password.expose_secret() {
            return Err(AppError::validation("Passwords must match"));
        }
        Ok(email)
    }
}

fn parse_email(raw: &str) -> Result<Email> {
    Email::parse(raw).map_err(|e| match e {
        EmailError::Empty => AppError::validation("Email is required"),
        EmailError::TooLong { .. } | EmailError::Malformed => {
            AppError::validation("Invalid email address")
        }
    })
}
