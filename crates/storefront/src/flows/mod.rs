//! Operations the views trigger.
//!
//! Each flow validates its input, calls the collaborator behind the seam, and
//! dispatches the resulting actions into the store. Errors come back as
//! [`AppError`](crate::error::AppError) for the view to show.
//!
//! # Flows
//!
//! - `catalog` - Load, retry, filter, paginate
//! - `cart` - Add, remove, set quantity, clear
//! - `checkout` - Summary and order placement
//! - `search` - Debounced free-text query
//! - `session` - Hydrate, login, signup, logout

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod session;
