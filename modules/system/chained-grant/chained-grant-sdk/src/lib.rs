#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Chained Grant SDK
//!
//! This crate provides the public API for the `chained_grant` module, which
//! evaluates the `urn:ietf:params:oauth:grant_type:redelegate` grant: a client
//! presenting a live access token obtains an approved authentication context for
//! a new token carrying the same or a narrower scope set.
//!
//! - [`ChainedGrantClient`] - Public API trait for consumers (token endpoint)
//! - [`TokenStore`], [`ClientRegistry`] - Collaborator traits the evaluator queries
//! - [`DelegationRequest`], [`AuthenticationContext`] - Request and result models
//! - [`ScopeSet`] - Scope set semantics (subset, intersection, wire parsing)
//! - [`ChainedGrantError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use chained_grant_sdk::{ChainedGrantClient, DelegationRequest, ScopeSet};
//!
//! let request = DelegationRequest::new("service-b", token_value)
//!     .with_scopes(ScopeSet::parse("read"));
//!
//! let ctx = chained.evaluate(request).await?;
//! assert!(ctx.scopes().contains("read"));
//! ```

pub mod api;
pub mod error;
pub mod grant;
pub mod models;
pub mod plugin_api;
pub mod scope;

// Re-export main types at crate root
pub use api::ChainedGrantClient;
pub use error::{ChainedGrantError, ClientRegistryError, TokenStoreError};
pub use grant::{GRANT_TYPE_PARAM, REDELEGATE_GRANT_TYPE, SCOPE_PARAM, TOKEN_PARAM};
pub use models::{
    AccessToken, AuthenticationContext, AuthenticationContextBuilder, DelegationRequest, Principal,
    ScopeResolution, StoredAuthentication,
};
pub use plugin_api::{ClientRegistry, TokenStore};
pub use scope::ScopeSet;
