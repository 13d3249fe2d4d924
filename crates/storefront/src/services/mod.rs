//! External collaborators of the storefront.
//!
//! Everything behind these seams is an in-process mock with an artificial
//! delay. Swapping in a real backend means implementing the trait.
//!
//! # Services
//!
//! - `auth` - Credential check and signup ([`auth::CredentialSource`])
//! - `catalog` - Product list source and its cache ([`catalog::CatalogSource`])
//! - `checkout` - Order placement ([`checkout::CheckoutGateway`])
//! - `storage` - Key-value session persistence ([`storage::KeyValueStore`])

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod storage;
