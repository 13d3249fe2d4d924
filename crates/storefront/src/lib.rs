//! Shopfront storefront library.
//!
//! The state layer of a single-page storefront: catalog browsing with
//! search, filters and pagination, a cart with running totals, a demo sign-in
//! session, and a one-shot checkout. Every backend is an in-process mock with
//! an artificial delay.
//!
//! # Architecture
//!
//! - [`store`] - Pure reducers over a single state tree
//! - [`state::AppState`] - Composition root owning the store and the services
//! - [`flows`] - Async operations that call services and dispatch actions
//! - [`services`] - Mock collaborators behind traits
//! - [`routes`] - Route guard
//!
//! # Security
//!
//! There is no authentication security model. The credential is a hard-coded
//! demo pair and the session token is stored in plain text. Do not use this
//! for real accounts.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod flows;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;
