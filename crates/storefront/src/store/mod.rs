//! The storefront's state container.
//!
//! Every mutation is a pure reducer `(state, action) -> state`. [`Store`] is
//! the whole tree; [`AppState`](crate::state::AppState) owns one and funnels
//! every [`Action`] through [`reduce`]. Derived fields (filtered list, cart
//! totals, page count) are recomputed inside the reducer, so a store read
//! between actions is always consistent.
//!
//! # Slices
//!
//! - `catalog` - Product list, search criteria, pagination
//! - `cart` - Lines and running totals
//! - `session` - Signed-in user and submission flag

pub mod cart;
pub mod catalog;
pub mod session;

use serde::Serialize;

pub use self::cart::CartAction;
pub use self::catalog::{CatalogAction, CatalogState};
pub use self::session::SessionAction;

use crate::models::{Cart, SessionState};

/// Root state tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    pub catalog: CatalogState,
    pub cart: Cart,
    pub session: SessionState,
}

impl Store {
    /// Fresh store with the catalog paginated at `items_per_page`.
    #[must_use]
    pub fn new(items_per_page: u32) -> Self {
        Self {
            catalog: CatalogState::new(items_per_page),
            cart: Cart::new(),
            session: SessionState::default(),
        }
    }

    /// What the page header shows.
    #[must_use]
    pub fn header(&self) -> HeaderSummary {
        HeaderSummary {
            cart_badge: Some(self.cart.total_items()).filter(|n| *n > 0),
            greeting_name: self.session.display_name().map(str::to_owned),
        }
    }
}

/// Cart badge and greeting for the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSummary {
    /// Items in the cart; `None` hides the badge.
    pub cart_badge: Option<u32>,
    /// Name of the signed-in user.
    pub greeting_name: Option<String>,
}

/// Any mutation of the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Catalog(CatalogAction),
    Cart(CartAction),
    Session(SessionAction),
}

impl From<CatalogAction> for Action {
    fn from(action: CatalogAction) -> Self {
        Self::Catalog(action)
    }
}

impl From<CartAction> for Action {
    fn from(action: CartAction) -> Self {
        Self::Cart(action)
    }
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Self::Session(action)
    }
}

/// Route an action to the slice it belongs to.
#[must_use]
pub fn reduce(store: Store, action: Action) -> Store {
    match action {
        Action::Catalog(a) => Store {
            catalog: catalog::reduce(store.catalog, a),
            ..store
        },
        Action::Cart(a) => Store {
            cart: cart::reduce(store.cart, a),
            ..store
        },
        Action::Session(a) => Store {
            session: session::reduce(store.session, a),
            ..store
        },
    }
}
