//! Collaborator implementations for the static grant store plugin.
//!
//! Implements `TokenStore` and `ClientRegistry` using the domain service.

use async_trait::async_trait;
use chained_grant_sdk::{
    AccessToken, ClientRegistry, ClientRegistryError, ScopeSet, TokenStore, TokenStoreError,
};
use time::OffsetDateTime;

use super::service::Service;

#[async_trait]
impl TokenStore for Service {
    async fn lookup_access_token(&self, value: &str) -> Result<AccessToken, TokenStoreError> {
        self.lookup(value, OffsetDateTime::now_utc())
    }
}

#[async_trait]
impl ClientRegistry for Service {
    async fn get_registered_scopes(&self, client_id: &str) -> Result<ScopeSet, ClientRegistryError> {
        self.registered_scopes(client_id)
            .cloned()
            .ok_or_else(|| ClientRegistryError::ClientNotFound(client_id.to_owned()))
    }
}
