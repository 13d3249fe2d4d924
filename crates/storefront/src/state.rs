//! Application state shared across flows.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::config::StorefrontConfig;
use crate::routes::{Resolution, Route};
use crate::services::auth::{CredentialSource, MockAuthService};
use crate::services::catalog::{CatalogClient, CatalogSource, MockCatalog};
use crate::services::checkout::{CheckoutGateway, MockCheckout};
use crate::services::storage::{FileStore, KeyValueStore, MemoryStore, SessionStorage};
use crate::store::{self, Action, HeaderSummary, Store};

/// The collaborators behind the storefront's seams.
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn CatalogSource>,
    pub auth: Arc<dyn CredentialSource>,
    pub checkout: Arc<dyn CheckoutGateway>,
    pub storage: Arc<dyn KeyValueStore>,
}

impl Services {
    /// In-process mocks configured from `config`.
    ///
    /// The session store is file-backed when `session_file` is set and
    /// in-memory otherwise.
    #[must_use]
    pub fn mock(config: &StorefrontConfig) -> Self {
        let storage: Arc<dyn KeyValueStore> = match &config.session_file {
            Some(path) => {
                let store = FileStore::new(path);
                debug!(path = %store.path().display(), "Using file-backed session store");
                Arc::new(store)
            }
            None => Arc::new(MemoryStore::new()),
        };

        Self {
            catalog: Arc::new(MockCatalog::new(config.delays.catalog, config.currency)),
            auth: Arc::new(MockAuthService::new(
                config.delays.auth,
                config.demo_account.clone(),
            )),
            checkout: Arc::new(MockCheckout::new(config.delays.checkout)),
            storage,
        }
    }
}

/// Application state shared across all flows.
///
/// This struct is cheaply cloneable via `Arc`. It owns the single [`Store`];
/// every mutation goes through [`AppState::dispatch`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    auth: Arc<dyn CredentialSource>,
    checkout: Arc<dyn CheckoutGateway>,
    storage: SessionStorage,
    store: RwLock<Store>,
}

impl AppState {
    /// Create application state backed by the mock services.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let services = Services::mock(&config);
        Self::with_services(config, services)
    }

    /// Create application state over the given collaborators.
    #[must_use]
    pub fn with_services(config: StorefrontConfig, services: Services) -> Self {
        let catalog = CatalogClient::new(services.catalog, config.catalog.cache_ttl);
        let store = Store::new(config.catalog.items_per_page);

        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                auth: services.auth,
                checkout: services.checkout,
                storage: SessionStorage::new(services.storage),
                store: RwLock::new(store),
                config,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cached catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the credential source.
    #[must_use]
    pub fn auth(&self) -> &dyn CredentialSource {
        self.inner.auth.as_ref()
    }

    /// Get a reference to the checkout gateway.
    #[must_use]
    pub fn checkout(&self) -> &dyn CheckoutGateway {
        self.inner.checkout.as_ref()
    }

    /// Get a reference to the session persistence shim.
    #[must_use]
    pub fn storage(&self) -> &SessionStorage {
        &self.inner.storage
    }

    /// Apply `action` to the store.
    ///
    /// The reducer runs on a copy that replaces the store only once it
    /// returns. If it panics, the previous store stays in place and the
    /// poisoned lock is recovered by later callers.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let mut guard = self
            .inner
            .store
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let next = store::reduce(guard.clone(), action.into());
        *guard = next;
    }

    /// Read from the store without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let guard = self
            .inner
            .store
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// A copy of the whole store.
    #[must_use]
    pub fn snapshot(&self) -> Store {
        self.read(Clone::clone)
    }

    /// Cart badge and greeting.
    #[must_use]
    pub fn header(&self) -> HeaderSummary {
        self.read(Store::header)
    }

    /// Guard a navigation against the current session.
    #[must_use]
    pub fn resolve(&self, route: Route) -> Resolution {
        self.read(|s| crate::routes::resolve(route, &s.session))
    }
}
