//! Domain models for the storefront state layer.
//!
//! These are plain data types. The reducers in [`crate::store`] own every
//! mutation; nothing here performs I/O.

pub mod cart;
pub mod search;
pub mod session;

pub use cart::{Cart, CartLine, CheckoutSummary, LineSummary};
pub use search::{PriceBounds, SearchCriteria};
pub use session::SessionState;
