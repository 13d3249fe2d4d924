//! Debounced free-text search.
//!
//! Keystrokes arrive faster than the catalog needs to refilter. Each call to
//! [`SearchDebouncer::input`] bumps a generation counter and schedules the
//! query after the debounce window; when the window ends, the query is applied
//! only if no newer input arrived in the meantime.
//!
//! The counter is checked and the query dispatched under one lock, so a
//! [`SearchDebouncer::clear`] racing a pending input on another worker thread
//! always wins.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::state::AppState;
use crate::store::CatalogAction;

/// Applies only the last query typed within the debounce window.
#[derive(Clone)]
pub struct SearchDebouncer {
    state: AppState,
    delay: Duration,
    generation: Arc<Mutex<u64>>,
}

impl SearchDebouncer {
    /// Debouncer using the configured window.
    #[must_use]
    pub fn new(state: AppState) -> Self {
        let delay = state.config().catalog.search_debounce;
        Self::with_delay(state, delay)
    }

    #[must_use]
    pub fn with_delay(state: AppState, delay: Duration) -> Self {
        Self {
            state,
            delay,
            generation: Arc::new(Mutex::new(0)),
        }
    }

    /// Schedule `query`. The task resolves to whether it was applied.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn input(&self, query: impl Into<String>) -> JoinHandle<bool> {
        let query = query.into();
        let ticket = {
            let mut generation = self.generation();
            *generation = generation.wrapping_add(1);
            *generation
        };
        let this = self.clone();

        tokio::spawn(async move {
            tokio::time::sleep(this.delay).await;
            let generation = this.generation();
            if *generation != ticket {
                debug!(query = %query, "Superseded search input");
                return false;
            }
            this.state.dispatch(CatalogAction::SetQuery(query));
            drop(generation);
            true
        })
    }

    /// Clear the query now, dropping any pending input.
    pub fn clear(&self) {
        let mut generation = self.generation();
        *generation = generation.wrapping_add(1);
        self.state.dispatch(CatalogAction::SetQuery(String::new()));
        drop(generation);
    }

    fn generation(&self) -> MutexGuard<'_, u64> {
        self.generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
