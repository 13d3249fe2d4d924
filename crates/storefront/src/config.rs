//! Storefront configuration loaded from environment variables.
//!
//! Every variable is optional; the defaults reproduce the demo storefront.
//!
//! # Environment Variables
//!
//! ## Mock latency
//! - `SHOPFRONT_CATALOG_DELAY_MS` - Product fetch delay (default: 800)
//! - `SHOPFRONT_AUTH_DELAY_MS` - Login/signup delay (default: 1000)
//! - `SHOPFRONT_CHECKOUT_DELAY_MS` - Checkout delay (default: 2000)
//!
//! ## Catalog
//! - `SHOPFRONT_CATALOG_CACHE_TTL_SECS` - Cached product list TTL (default: 300)
//! - `SHOPFRONT_ITEMS_PER_PAGE` - Initial page size, one of 4, 8, 12 (default: 8)
//! - `SHOPFRONT_SEARCH_DEBOUNCE_MS` - Search input debounce (default: 300)
//!
//! ## Checkout
//! - `SHOPFRONT_TAX_RATE` - Flat tax applied at checkout (default: 0.10)
//! - `SHOPFRONT_CURRENCY` - Display currency (default: INR)
//!
//! ## Session
//! - `SHOPFRONT_SESSION_FILE` - JSON file backing the session store (default: in-memory)
//! - `SHOPFRONT_DEMO_EMAIL` - Demo account email (default: demo@example.com)
//! - `SHOPFRONT_DEMO_PASSWORD` - Demo account password (default: password)
//!
//! ## Telemetry
//! - `SHOPFRONT_LOG_JSON` - Emit JSON logs (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//!
//! The demo credential is a fixture, not a security model. Nothing here is fit
//! for production authentication.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use secrecy::SecretString;
use shopfront_core::CurrencyCode;
use thiserror::Error;

/// Page sizes the product list offers.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [4, 8, 12];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Latency of the mock collaborators
    pub delays: MockDelays,
    /// Catalog behaviour
    pub catalog: CatalogConfig,
    /// Flat tax rate applied to the checkout total
    pub tax_rate: Decimal,
    /// Currency prices are displayed in
    pub currency: CurrencyCode,
    /// File backing the session store; in-memory when `None`
    pub session_file: Option<PathBuf>,
    /// The single account the mock credential check accepts
    pub demo_account: DemoAccount,
    /// Telemetry configuration
    pub telemetry: TelemetryConfig,
}

/// Artificial latency of each mock call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDelays {
    pub catalog: Duration,
    pub auth: Duration,
    pub checkout: Duration,
}

/// Catalog fetch and listing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// How long a fetched product list is served from cache
    pub cache_ttl: Duration,
    /// Initial page size
    pub items_per_page: u32,
    /// Quiet period before a typed query is applied
    pub search_debounce: Duration,
}

/// Demo credential pair.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DemoAccount {
    pub email: String,
    pub password: SecretString,
}

impl std::fmt::Debug for DemoAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoAccount")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Logging and error tracking configuration.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error event sample rate
    pub sentry_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            delays: MockDelays::default(),
            catalog: CatalogConfig::default(),
            tax_rate: Decimal::new(10, 2),
            currency: CurrencyCode::INR,
            session_file: None,
            demo_account: DemoAccount::default(),
            telemetry: TelemetryConfig {
                sentry_sample_rate: 1.0,
                ..TelemetryConfig::default()
            },
        }
    }
}

impl Default for MockDelays {
    fn default() -> Self {
        Self {
            catalog: Duration::from_millis(800),
            auth: Duration::from_millis(1000),
            checkout: Duration::from_millis(2000),
        }
    }
}

impl MockDelays {
    /// No latency at all; used by tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            catalog: Duration::ZERO,
            auth: Duration::ZERO,
            checkout: Duration::ZERO,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
            items_per_page: 8,
            search_debounce: Duration::from_millis(300),
        }
    }
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            email: "demo@example.com".to_string(),
            password: SecretString::from("password"),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed or is
    /// out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let delays = MockDelays {
            catalog: get_millis_or("SHOPFRONT_CATALOG_DELAY_MS", defaults.delays.catalog)?,
            auth: get_millis_or("SHOPFRONT_AUTH_DELAY_MS", defaults.delays.auth)?,
            checkout: get_millis_or("SHOPFRONT_CHECKOUT_DELAY_MS", defaults.delays.checkout)?,
        };

        let items_per_page =
            get_parsed_or("SHOPFRONT_ITEMS_PER_PAGE", defaults.catalog.items_per_page)?;
        validate_page_size(items_per_page, "SHOPFRONT_ITEMS_PER_PAGE")?;

        let catalog = CatalogConfig {
            cache_ttl: Duration::from_secs(get_parsed_or(
                "SHOPFRONT_CATALOG_CACHE_TTL_SECS",
                defaults.catalog.cache_ttl.as_secs(),
            )?),
            items_per_page,
            search_debounce: get_millis_or(
                "SHOPFRONT_SEARCH_DEBOUNCE_MS",
                defaults.catalog.search_debounce,
            )?,
        };

        let tax_rate = get_parsed_or("SHOPFRONT_TAX_RATE", defaults.tax_rate)?;
        validate_tax_rate(tax_rate, "SHOPFRONT_TAX_RATE")?;

        let currency = get_parsed_or("SHOPFRONT_CURRENCY", defaults.currency)?;

        let demo_account = DemoAccount {
            email: get_env_or_default("SHOPFRONT_DEMO_EMAIL", &defaults.demo_account.email),
            password: get_optional_env("SHOPFRONT_DEMO_PASSWORD")
                .map_or(defaults.demo_account.password, SecretString::from),
        };

        let telemetry = TelemetryConfig {
            log_json: get_parsed_or("SHOPFRONT_LOG_JSON", false)?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: get_parsed_or(
                "SENTRY_SAMPLE_RATE",
                defaults.telemetry.sentry_sample_rate,
            )?,
        };

        Ok(Self {
            delays,
            catalog,
            tax_rate,
            currency,
            session_file: get_optional_env("SHOPFRONT_SESSION_FILE").map(PathBuf::from),
            demo_account,
            telemetry,
        })
    }

    /// Same configuration with every mock delay set to zero.
    #[must_use]
    pub const fn without_delays(mut self) -> Self {
        self.delays = MockDelays::none();
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn get_parsed_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

/// Parse a millisecond duration variable.
fn get_millis_or(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |raw| {
        parse_value::<u64>(key, &raw).map(Duration::from_millis)
    })
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Validate that a page size is one the product list offers.
fn validate_page_size(size: u32, var_name: &str) -> Result<(), ConfigError> {
    if PAGE_SIZE_OPTIONS.contains(&size) {
        return Ok(());
    }
    Err(ConfigError::InvalidEnvVar(
        var_name.to_string(),
        format!("must be one of {PAGE_SIZE_OPTIONS:?} (got {size})"),
    ))
}

/// Validate that a tax rate is a fraction between 0 and 1.
fn validate_tax_rate(rate: Decimal, var_name: &str) -> Result<(), ConfigError> {
    if rate >= Decimal::ZERO && rate <= Decimal::ONE {
        return Ok(());
    }
    Err(ConfigError::InvalidEnvVar(
        var_name.to_string(),
        format!("must be between 0 and 1 (got {rate})"),
    ))
}
