#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Grant Store Plugin
//!
//! Implements the chained grant's `TokenStore` and `ClientRegistry`
//! collaborators from configuration, for development and testing.
//!
//! ## Configuration
//!
//! ```yaml
//! static_store:
//!   clients:
//!     - client_id: "portal"
//!       scope: ["openid", "profile", "orders:read"]
//!   tokens:
//!     - token: "portal-access-token"
//!       client_id: "portal"
//!       scope: ["profile", "orders:read"]
//!       user:
//!         subject: "alice"
//!         authorities: ["ROLE_USER"]
//!       expires_at: "2030-01-01T00:00:00Z"
//! ```

pub mod config;
pub mod domain;

pub use domain::Service as StaticGrantStore;
