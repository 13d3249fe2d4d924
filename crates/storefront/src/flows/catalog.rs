//! Catalog loading and browsing.

use rust_decimal::Decimal;
use tracing::{info, instrument};

use shopfront_core::{Price, Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::CatalogAction;

/// Fetch the product list into the catalog store.
///
/// Also the "try again" action after a failure: failures are never cached,
/// so this always reaches the source when the last attempt failed.
///
/// # Errors
///
/// Returns `AppError::FetchFailed` after recording the message in the store.
#[instrument(skip(state))]
pub async fn load(state: &AppState) -> Result<usize> {
    state.dispatch(CatalogAction::FetchStarted);

    match state.catalog().fetch_products().await {
        Ok(products) => {
            let count = products.len();
            state.dispatch(CatalogAction::FetchSucceeded(products));
            info!(count, "Catalog loaded");
            Ok(count)
        }
        Err(e) => {
            let err = AppError::from(e);
            state.dispatch(CatalogAction::FetchFailed(err.user_message()));
            err.report();
            Err(err)
        }
    }
}

/// Drop the cached list and fetch again.
///
/// # Errors
///
/// Returns `AppError::FetchFailed` if the fetch fails.
pub async fn reload(state: &AppState) -> Result<usize> {
    state.catalog().invalidate().await;
    load(state).await
}

/// Narrow the list by category; an empty string clears the filter.
pub fn select_category(state: &AppState, category: impl Into<String>) {
    state.dispatch(CatalogAction::SetCategory(category.into()));
}

/// Replace both price bounds.
///
/// # Errors
///
/// Returns `AppError::ValidationFailed` for a negative bound or `min > max`.
pub fn set_price_range(state: &AppState, min: Option<Decimal>, max: Option<Decimal>) -> Result<()> {
    let currency = state.config().currency;
    for bound in [min, max].into_iter().flatten() {
        Price::try_new(bound, currency).map_err(|e| AppError::validation(e.to_string()))?;
    }
    if let (Some(lo), Some(hi)) = (min, max)
        && lo > hi
    {
        return Err(AppError::validation("Minimum price cannot exceed maximum"));
    }
    state.dispatch(CatalogAction::SetPriceRange { min, max });
    Ok(())
}

/// Reset query, category and price bounds.
pub fn clear_filters(state: &AppState) {
    state.dispatch(CatalogAction::ClearFilters);
}

/// Jump to a page of the filtered list.
pub fn go_to_page(state: &AppState, page: u32) {
    state.dispatch(CatalogAction::SetPage(page));
}

/// Change the page size.
///
/// # Errors
///
/// Returns `AppError::ValidationFailed` unless `n` is one of the offered sizes.
pub fn set_items_per_page(state: &AppState, n: u32) -> Result<()> {
    if !crate::config::PAGE_SIZE_OPTIONS.contains(&n) {
        return Err(AppError::validation(format!("Page size {n} is not offered")));
    }
    state.dispatch(CatalogAction::SetItemsPerPage(n));
    Ok(())
}

/// Products on the current page.
#[must_use]
pub fn visible_products(state: &AppState) -> Vec<Product> {
    state.read(|s| s.catalog.current_page_products().to_vec())
}

/// A product from the loaded list by id.
#[must_use]
pub fn find_product(state: &AppState, id: ProductId) -> Option<Product> {
    state.read(|s| s.catalog.products().iter().find(|p| p.id == id).cloned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;

    fn state() -> AppState {
        AppState::new(StorefrontConfig::default().without_delays())
    }

    #[tokio::test]
    async fn test_load_fills_store() {
        let state = state();
        assert_eq!(load(&state).await.unwrap(), 16);
        state.read(|s| {
            assert!(!s.catalog.is_loading());
            assert_eq!(s.catalog.filtered().len(), 16);
        });
        assert_eq!(visible_products(&state).len(), 8);
    }

    #[tokio::test]
    async fn test_reload_refetches() {
        let state = state();
        load(&state).await.unwrap();
        assert_eq!(reload(&state).await.unwrap(), 16);
    }

    #[tokio::test]
    async fn test_find_product() {
        let state = state();
        assert!(find_product(&state, ProductId::new(2)).is_none());
        load(&state).await.unwrap();
        assert_eq!(
            find_product(&state, ProductId::new(2)).unwrap().title,
            "Mens Casual Premium Slim Fit T-Shirts"
        );
    }

    #[tokio::test]
    async fn test_price_range_validation() {
        let state = state();
        load(&state).await.unwrap();
        assert!(set_price_range(&state, Some(Decimal::from(-1)), None).is_err());
        assert!(set_price_range(&state, Some(Decimal::from(50)), Some(Decimal::from(10))).is_err());
        set_price_range(&state, None, Some(Decimal::from(20))).unwrap();
        state.read(|s| assert_eq!(s.catalog.filtered().len(), 3));
    }

    #[tokio::test]
    async fn test_page_size_must_be_offered() {
        let state = state();
        load(&state).await.unwrap();
        assert!(set_items_per_page(&state, 5).is_err());
        set_items_per_page(&state, 4).unwrap();
        state.read(|s| assert_eq!(s.catalog.pagination().total_pages(), 4));
    }

    #[tokio::test]
    async fn test_category_then_clear() {
        let state = state();
        load(&state).await.unwrap();
        select_category(&state, "jewelery");
        state.read(|s| assert_eq!(s.catalog.filtered().len(), 4));
        clear_filters(&state);
        state.read(|s| assert_eq!(s.catalog.filtered().len(), 16));
        go_to_page(&state, 2);
        state.read(|s| assert_eq!(s.catalog.pagination().current_page(), 2));
    }
}
