//! Integration tests for Shopfront.
//!
//! Scenarios drive the public flows end to end against the mock services,
//! with every artificial delay set to zero.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_browsing` - Load, retry, search, filter, paginate
//! - `cart_checkout` - Cart totals and checkout outcomes
//! - `session_auth` - Login, signup, hydrate, logout, route guard

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use shopfront::config::StorefrontConfig;
use shopfront::services::catalog::{CatalogError, CatalogSource, MockCatalog};
use shopfront::services::checkout::{GatewayMode, MockCheckout};
use shopfront::services::storage::KeyValueStore;
use shopfront::state::{AppState, Services};
use shopfront_core::Product;

/// Builds an [`AppState`] over mocks, with selected services swapped out.
pub struct TestContext {
    config: StorefrontConfig,
    services: Services,
}

impl TestContext {
    /// Default config, no delays, all mocks.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig::default().without_delays();
        let services = Services::mock(&config);
        Self { config, services }
    }

    /// Serve the catalog from `source`.
    #[must_use]
    pub fn with_catalog(mut self, source: Arc<dyn CatalogSource>) -> Self {
        self.services.catalog = source;
        self
    }

    /// Make the checkout gateway accept or reject.
    #[must_use]
    pub fn with_gateway(mut self, mode: GatewayMode) -> Self {
        self.services.checkout = Arc::new(MockCheckout::new(self.config.delays.checkout).with_mode(mode));
        self
    }

    /// Persist sessions in `store`.
    #[must_use]
    pub fn with_storage(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.services.storage = store;
        self
    }

    /// Use `items_per_page` for the initial page size.
    #[must_use]
    pub const fn with_items_per_page(mut self, items_per_page: u32) -> Self {
        self.config.catalog.items_per_page = items_per_page;
        self
    }

    #[must_use]
    pub fn build(self) -> AppState {
        AppState::with_services(self.config, self.services)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog source that fails its first `failures` fetches, then serves the
/// demo catalog.
pub struct FlakyCatalog {
    inner: MockCatalog,
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyCatalog {
    #[must_use]
    pub fn new(failures: usize) -> Self {
        let config = StorefrontConfig::default().without_delays();
        Self {
            inner: MockCatalog::new(config.delays.catalog, config.currency),
            failures,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fetches seen so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FlakyCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(CatalogError::Unavailable("Network error".to_string()));
        }
        self.inner.fetch_products().await
    }
}
