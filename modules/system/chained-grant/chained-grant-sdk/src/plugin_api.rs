//! Collaborator traits consumed by the chained grant evaluator.
//!
//! Token persistence and client registration live outside this module.
//! Implementations must be safe to call concurrently and must return a
//! point-in-time-consistent snapshot; the evaluator holds no locks and only
//! ever reads through these traits.

use async_trait::async_trait;

use crate::error::{ClientRegistryError, TokenStoreError};
use crate::models::AccessToken;
use crate::scope::ScopeSet;

/// Read access to issued access tokens.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Resolve an opaque token value to its record.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no live token has this value (revoked tokens included)
    /// - `Expired` if the token exists but has expired
    /// - `Unavailable` / `Internal` for backend failures
    async fn lookup_access_token(&self, value: &str) -> Result<AccessToken, TokenStoreError>;
}

/// Read access to registered client metadata.
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    /// Return the scope set the client is registered with.
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if the client is not registered
    /// - `Unavailable` / `Internal` for backend failures
    async fn get_registered_scopes(&self, client_id: &str) -> Result<ScopeSet, ClientRegistryError>;
}
