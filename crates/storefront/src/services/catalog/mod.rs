//! Product catalog source and cached client.
//!
//! # Architecture
//!
//! - [`CatalogSource`] is the seam to whatever serves products. The only
//!   implementation shipped is [`MockCatalog`], which returns a fixed demo
//!   catalog after an artificial delay.
//! - [`CatalogClient`] sits in front of a source and caches the successful
//!   product list via `moka` (TTL from config). Failures are never cached, so a
//!   "try again" after an error always reaches the source.

mod data;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use shopfront_core::{CurrencyCode, Product};

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source could not produce a product list.
    #[error("{0}")]
    Unavailable(String),
}

/// Anything that can produce the full product list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unavailable` if the products cannot be fetched.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Fixed demo catalog with simulated latency. Never fails.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    delay: Duration,
    currency: CurrencyCode,
}

impl MockCatalog {
    /// Create a mock catalog that sleeps `delay` before every fetch.
    #[must_use]
    pub const fn new(delay: Duration, currency: CurrencyCode) -> Self {
        Self { delay, currency }
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(data::demo_products(self.currency))
    }
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Cache key for the full product list. There is only ever one entry.
const ALL_PRODUCTS: &str = "products";

/// Caching front for a [`CatalogSource`].
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    source: Arc<dyn CatalogSource>,
    cache: Cache<&'static str, Arc<Vec<Product>>>,
}

impl CatalogClient {
    /// Create a client that caches successful fetches for `ttl`.
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(1).time_to_live(ttl).build();

        Self {
            inner: Arc::new(CatalogClientInner { source, cache }),
        }
    }

    /// Get the full product list, from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns the source's error when nothing is cached and the fetch fails.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(cached) = self.inner.cache.get(ALL_PRODUCTS).await {
            debug!(count = cached.len(), "Catalog cache hit");
            return Ok(cached.as_ref().clone());
        }

        let products = self.inner.source.fetch_products().await?;
        debug!(count = products.len(), "Catalog fetched from source");

        self.inner
            .cache
            .insert(ALL_PRODUCTS, Arc::new(products.clone()))
            .await;

        Ok(products)
    }

    /// Drop the cached product list so the next fetch reaches the source.
    pub async fn invalidate(&self) {
        self.inner.cache.invalidate(ALL_PRODUCTS).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use shopfront_core::ProductId;

    use super::*;

    /// Counts fetches and fails the first `failures` of them.
    struct CountingSource {
        calls: AtomicUsize,
        failures: usize,
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(CatalogError::Unavailable("offline".to_string()));
            }
            MockCatalog::new(Duration::ZERO, CurrencyCode::INR)
                .fetch_products()
                .await
        }
    }

    fn counting(failures: usize) -> Arc<CountingSource> {
        Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            failures,
        })
    }

    #[tokio::test]
    async fn test_mock_catalog_serves_sixteen_products() {
        let products = MockCatalog::new(Duration::ZERO, CurrencyCode::INR)
            .fetch_products()
            .await
            .unwrap();
        assert_eq!(products.len(), 16);
        let ids: Vec<i64> = products.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_mock_catalog_product_two_is_tshirt() {
        let products = MockCatalog::new(Duration::ZERO, CurrencyCode::INR)
            .fetch_products()
            .await
            .unwrap();
        let tshirt = products.iter().find(|p| p.id == ProductId::new(2)).unwrap();
        assert_eq!(tshirt.title, "Mens Casual Premium Slim Fit T-Shirts");
        assert_eq!(tshirt.price.display(), "₹22.30");
    }

    #[tokio::test]
    async fn test_client_caches_success() {
        let source = counting(0);
        let client = CatalogClient::new(source.clone(), Duration::from_secs(60));

        client.fetch_products().await.unwrap();
        client.fetch_products().await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_client_does_not_cache_failure() {
        let source = counting(1);
        let client = CatalogClient::new(source.clone(), Duration::from_secs(60));

        assert!(client.fetch_products().await.is_err());
        assert_eq!(client.fetch_products().await.unwrap().len(), 16);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let source = counting(0);
        let client = CatalogClient::new(source.clone(), Duration::from_secs(60));

        client.fetch_products().await.unwrap();
        client.invalidate().await;
        client.fetch_products().await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
