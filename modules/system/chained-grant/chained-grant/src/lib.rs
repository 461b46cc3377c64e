//! Chained Grant Module
//!
//! Evaluates the `urn:ietf:params:oauth:grant_type:redelegate` grant: looks up
//! the presented access token, reconciles the requested scopes against the
//! token's granted scopes, and produces the approved authentication context
//! a token minter issues the new token from.
//!
//! Token storage and client registration are injected through the
//! `TokenStore` and `ClientRegistry` traits from `chained_grant_sdk`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod module;

pub use config::ChainedGrantConfig;
pub use dispatch::GrantDispatcher;
pub use module::{ChainedGrant, ChainedGrantDeps};
