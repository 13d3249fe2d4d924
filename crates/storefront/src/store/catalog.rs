//! Catalog store: the fetched product list and its filtered, paginated view.
//!
//! The filtered list is recomputed eagerly on every criteria change. Every
//! criteria change also resets the view to page 1.

use rust_decimal::Decimal;
use serde::Serialize;

use shopfront_core::Product;

use crate::models::search::distinct_categories;
use crate::models::{PriceBounds, SearchCriteria};
use crate::pagination::PaginationState;

/// Mutations of the catalog store.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// A fetch was issued.
    FetchStarted,
    /// A fetch returned the full product list.
    FetchSucceeded(Vec<Product>),
    /// A fetch failed with a message for the shopper.
    FetchFailed(String),
    /// Replace the free-text query.
    SetQuery(String),
    /// Replace the category filter; empty clears it.
    SetCategory(String),
    /// Replace both price bounds.
    SetPriceRange {
        min: Option<Decimal>,
        max: Option<Decimal>,
    },
    /// Drop query, category and price bounds.
    ClearFilters,
    /// Jump to a page.
    SetPage(u32),
    /// Change the page size.
    SetItemsPerPage(u32),
}

/// State of the catalog view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogState {
    products: Vec<Product>,
    filtered: Vec<Product>,
    criteria: SearchCriteria,
    categories: Vec<String>,
    price_bounds: Option<PriceBounds>,
    pagination: PaginationState,
    loading: bool,
    error: Option<String>,
}

impl CatalogState {
    /// Empty catalog paginated at `items_per_page`.
    #[must_use]
    pub fn new(items_per_page: u32) -> Self {
        Self {
            products: Vec::new(),
            filtered: Vec::new(),
            criteria: SearchCriteria::default(),
            categories: Vec::new(),
            price_bounds: None,
            pagination: PaginationState::new(items_per_page),
            loading: false,
            error: None,
        }
    }

    /// Full, unfiltered product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the current criteria, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// The current page of the filtered list.
    #[must_use]
    pub fn current_page_products(&self) -> &[Product] {
        self.pagination.slice(&self.filtered)
    }

    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Distinct categories of the full list, computed per successful load.
    #[must_use]
    pub fn available_categories(&self) -> &[String] {
        &self.categories
    }

    /// Lowest and highest price of the full list, computed per successful load.
    #[must_use]
    pub const fn price_bounds(&self) -> Option<PriceBounds> {
        self.price_bounds
    }

    #[must_use]
    pub const fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, cleared when a fetch starts.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn refilter(&mut self) {
        self.filtered = filter_products(&self.products, &self.criteria);
        self.pagination.set_total_items(self.filtered.len());
    }

    fn criteria_changed(&mut self) {
        self.pagination.reset_page();
        self.refilter();
    }
}

/// Apply a catalog action.
#[must_use]
pub fn reduce(mut state: CatalogState, action: CatalogAction) -> CatalogState {
    match action {
        CatalogAction::FetchStarted => {
            state.loading = true;
            state.error = None;
        }
        CatalogAction::FetchSucceeded(products) => {
            state.loading = false;
            state.categories = distinct_categories(&products);
            state.price_bounds = PriceBounds::of(&products);
            state.products = products;
            state.refilter();
        }
        CatalogAction::FetchFailed(message) => {
            // The last good list, if any, stays on screen.
            state.loading = false;
            state.error = Some(message);
        }
        CatalogAction::SetQuery(query) => {
            state.criteria.query = query;
            state.criteria_changed();
        }
        CatalogAction::SetCategory(category) => {
            state.criteria.category = Some(category).filter(|c| !c.is_empty());
            state.criteria_changed();
        }
        CatalogAction::SetPriceRange { min, max } => {
            state.criteria.min_price = min;
            state.criteria.max_price = max;
            state.criteria_changed();
        }
        CatalogAction::ClearFilters => {
            state.criteria = SearchCriteria::default();
            state.criteria_changed();
        }
        CatalogAction::SetPage(page) => state.pagination.set_page(page),
        CatalogAction::SetItemsPerPage(n) => state.pagination.set_items_per_page(n),
    }
    state
}

/// Products satisfying `criteria`, order preserved.
#[must_use]
pub fn filter_products(products: &[Product], criteria: &SearchCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use shopfront_core::{CurrencyCode, ProductId};

    use super::*;
    use crate::services::catalog::{CatalogSource, MockCatalog};

    async fn demo() -> Vec<Product> {
        MockCatalog::new(Duration::ZERO, CurrencyCode::INR)
            .fetch_products()
            .await
            .unwrap()
    }

    async fn loaded() -> CatalogState {
        reduce(CatalogState::new(8), CatalogAction::FetchSucceeded(demo().await))
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.as_i64()).collect()
    }

    #[tokio::test]
    async fn test_load_populates_derived_fields() {
        let state = loaded().await;
        assert_eq!(state.filtered().len(), 16);
        assert_eq!(state.pagination().total_pages(), 2);
        assert_eq!(
            state.available_categories(),
            ["electronics", "jewelery", "men's clothing", "women's clothing"]
        );
        let bounds = state.price_bounds().unwrap();
        assert_eq!(bounds.min, Decimal::new(999, 2));
        assert_eq!(bounds.max, Decimal::new(99_999, 2));
    }

    #[tokio::test]
    async fn test_page_two_is_products_nine_to_sixteen() {
        let state = reduce(loaded().await, CatalogAction::SetPage(2));
        assert_eq!(ids(state.current_page_products()), (9..=16).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_query_shirt() {
        let state = reduce(loaded().await, CatalogAction::SetQuery("shirt".to_string()));
        assert_eq!(ids(state.filtered()), vec![2]);
    }

    #[tokio::test]
    async fn test_filter_is_idempotent_and_empty_criteria_is_identity() {
        let products = demo().await;
        assert_eq!(filter_products(&products, &SearchCriteria::default()), products);

        let criteria = SearchCriteria {
            query: "jacket".to_string(),
            max_price: Some(Decimal::from(60)),
            ..SearchCriteria::default()
        };
        let once = filter_products(&products, &criteria);
        let twice = filter_products(&once, &criteria);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec![3, 15, 16]);
    }

    #[tokio::test]
    async fn test_criteria_change_resets_page() {
        let state = reduce(loaded().await, CatalogAction::SetPage(2));
        let state = reduce(state, CatalogAction::SetCategory("electronics".to_string()));
        assert_eq!(state.pagination().current_page(), 1);
        assert_eq!(ids(state.filtered()), (9..=14).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_empty_category_clears() {
        let state = reduce(loaded().await, CatalogAction::SetCategory("jewelery".to_string()));
        let state = reduce(state, CatalogAction::SetCategory(String::new()));
        assert!(state.criteria().category.is_none());
        assert_eq!(state.filtered().len(), 16);
    }

    #[tokio::test]
    async fn test_price_range_and_clear() {
        let state = reduce(
            loaded().await,
            CatalogAction::SetPriceRange {
                min: Some(Decimal::from(100)),
                max: Some(Decimal::from(200)),
            },
        );
        assert_eq!(ids(state.filtered()), vec![1, 6, 10, 12]);
        assert!(state.criteria().has_active_filters());

        let state = reduce(state, CatalogAction::ClearFilters);
        assert_eq!(state.filtered().len(), 16);
        assert_eq!(state.criteria(), &SearchCriteria::default());
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous_list() {
        let state = reduce(loaded().await, CatalogAction::FetchStarted);
        assert!(state.is_loading());
        let state = reduce(state, CatalogAction::FetchFailed("offline".to_string()));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("offline"));
        assert_eq!(state.products().len(), 16);
    }

    #[test]
    fn test_failed_first_fetch_leaves_list_empty() {
        let state = reduce(CatalogState::new(8), CatalogAction::FetchStarted);
        let state = reduce(state, CatalogAction::FetchFailed("offline".to_string()));
        assert!(state.products().is_empty());
        assert!(state.available_categories().is_empty());
        assert!(state.price_bounds().is_none());
    }

    #[tokio::test]
    async fn test_fetch_started_clears_error() {
        let state = reduce(CatalogState::new(8), CatalogAction::FetchFailed("x".to_string()));
        let state = reduce(state, CatalogAction::FetchStarted);
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_items_per_page() {
        let state = reduce(loaded().await, CatalogAction::SetPage(2));
        let state = reduce(state, CatalogAction::SetItemsPerPage(4));
        assert_eq!(state.pagination().current_page(), 1);
        assert_eq!(state.pagination().total_pages(), 4);
        assert_eq!(state.current_page_products().len(), 4);
        assert_eq!(state.current_page_products().first().unwrap().id, ProductId::new(1));
    }

    #[tokio::test]
    async fn test_refetch_keeps_active_criteria() {
        let state = reduce(loaded().await, CatalogAction::SetQuery("shirt".to_string()));
        let state = reduce(state, CatalogAction::FetchStarted);
        let state = reduce(state, CatalogAction::FetchSucceeded(demo().await));

        assert_eq!(state.criteria().query, "shirt");
        assert_eq!(ids(state.filtered()), vec![2]);
        assert_eq!(state.products().len(), 16);
    }
}
