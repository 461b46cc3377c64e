//! Domain service for the chained grant.

use std::sync::Arc;

use chained_grant_sdk::{
    AccessToken, AuthenticationContext, ClientRegistry, ClientRegistryError, DelegationRequest,
    REDELEGATE_GRANT_TYPE, ScopeSet, TokenStore,
};
use secrecy::ExposeSecret;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::error::DomainError;
use super::scope::{self, Reconciled};
use crate::config::ChainedGrantConfig;

/// Chained grant evaluator.
///
/// Stateless apart from the injected collaborators: every call performs
/// read-only lookups and builds a fresh context, so one instance can serve any
/// number of concurrent requests. The presented token is never revoked or
/// modified.
pub struct Service {
    token_store: Arc<dyn TokenStore>,
    client_registry: Arc<dyn ClientRegistry>,
    config: ChainedGrantConfig,
}

impl Service {
    #[must_use]
    pub fn new(
        token_store: Arc<dyn TokenStore>,
        client_registry: Arc<dyn ClientRegistry>,
        config: ChainedGrantConfig,
    ) -> Self {
        Self {
            token_store,
            client_registry,
            config,
        }
    }

    /// Evaluate a redelegation request.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the token is empty, unknown, or expired
    /// - `InvalidScope` if the requested scopes exceed the token's scopes
    /// - `CollaboratorUnavailable` / `Internal` for lookup failures
    #[tracing::instrument(skip_all, fields(client_id = %request.client_id))]
    pub async fn evaluate(
        &self,
        request: &DelegationRequest,
    ) -> Result<AuthenticationContext, DomainError> {
        let token = self.load_token(request.token.expose_secret()).await?;

        let requested = request.scopes.clone().unwrap_or_default();
        let registered = if self.config.compensate_shadowed_scopes {
            Some(self.registered_scopes(&token.client_id).await?)
        } else {
            None
        };

        let Reconciled { scopes, resolution } =
            scope::reconcile(&token.scope, requested, registered.as_ref()).map_err(|rejection| {
                warn!(
                    token_client_id = %token.client_id,
                    requested = %rejection.requested,
                    excess = %rejection.excess(),
                    "Chained request asked for scopes beyond the presented token"
                );
                DomainError::from(rejection)
            })?;

        info!(
            token_client_id = %token.client_id,
            scopes = %scopes,
            resolution = ?resolution,
            "Approved chained grant"
        );

        Ok(AuthenticationContext::builder()
            .client_id(request.client_id.clone())
            .grant_type(REDELEGATE_GRANT_TYPE)
            .approved(true)
            .scopes(scopes)
            .user(token.authentication.user)
            .delegated_from(token.client_id)
            .scope_resolution(resolution)
            .build())
    }

    async fn load_token(&self, value: &str) -> Result<AccessToken, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidToken("no token presented".to_owned()));
        }

        let token = self.token_store.lookup_access_token(value).await?;

        // Stores are expected to hide expired tokens; re-check in case the
        // snapshot raced the expiry instant.
        if token.is_expired(OffsetDateTime::now_utc()) {
            return Err(DomainError::InvalidToken("access token expired".to_owned()));
        }

        Ok(token)
    }

    async fn registered_scopes(&self, client_id: &str) -> Result<ScopeSet, DomainError> {
        match self.client_registry.get_registered_scopes(client_id).await {
            Ok(scopes) => Ok(scopes),
            Err(ClientRegistryError::ClientNotFound(_)) => {
                debug!(
                    token_client_id = %client_id,
                    "Owning client not registered; skipping shadowed scope check"
                );
                Ok(ScopeSet::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}
