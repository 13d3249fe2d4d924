//! Shopfront Core - Shared types library.
//!
//! This crate provides the types used across all Shopfront components:
//! - `shopfront` - Storefront state layer (catalog, cart, session, checkout)
//! - `shopfront-integration-tests` - End-to-end scenarios against the mock services
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no clocks. This keeps
//! it lightweight and lets the reducers in the storefront crate stay pure.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, emails, products and users

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
