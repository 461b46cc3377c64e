//! Service implementation for the static grant store plugin.

use std::collections::HashMap;

use chained_grant_sdk::{AccessToken, ScopeSet, StoredAuthentication, TokenStoreError};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::config::{StaticGrantStorePluginConfig, TokenConfig};

/// Static token store and client registry.
///
/// Records are loaded once from configuration and never change afterwards;
/// there is no revoke or update path.
pub struct Service {
    tokens: HashMap<String, AccessToken>,
    clients: HashMap<String, ScopeSet>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// Entries with an empty token value are skipped; duplicate token values
    /// or client ids keep the last entry.
    #[must_use]
    pub fn from_config(cfg: &StaticGrantStorePluginConfig) -> Self {
        let clients: HashMap<String, ScopeSet> = cfg
            .clients
            .iter()
            .map(|c| (c.client_id.clone(), c.scope.iter().cloned().collect()))
            .collect();

        let mut tokens = HashMap::with_capacity(cfg.tokens.len());
        for t in &cfg.tokens {
            if t.token.is_empty() {
                warn!(client_id = %t.client_id, "Skipping token entry with empty value");
                continue;
            }
            if tokens.insert(t.token.clone(), build_record(t)).is_some() {
                warn!(client_id = %t.client_id, "Duplicate token value; keeping last entry");
            }
        }

        info!(
            client_count = clients.len(),
            token_count = tokens.len(),
            "Loaded static grant store"
        );

        Self { tokens, clients }
    }

    /// Resolve a token value.
    ///
    /// # Errors
    ///
    /// - `NotFound` for unknown or empty values
    /// - `Expired` if the record's expiry has passed
    pub fn lookup(&self, value: &str, now: OffsetDateTime) -> Result<AccessToken, TokenStoreError> {
        let record = self.tokens.get(value).ok_or(TokenStoreError::NotFound)?;
        if record.is_expired(now) {
            return Err(TokenStoreError::Expired);
        }
        Ok(record.clone())
    }

    /// Registered scopes of a client, if the client is known.
    #[must_use]
    pub fn registered_scopes(&self, client_id: &str) -> Option<&ScopeSet> {
        self.clients.get(client_id)
    }
}

fn build_record(t: &TokenConfig) -> AccessToken {
    AccessToken {
        client_id: t.client_id.clone(),
        scope: t.scope.iter().cloned().collect(),
        authentication: StoredAuthentication {
            client_id: t.client_id.clone(),
            user: t.user.clone(),
        },
        expires_at: t.expires_at,
    }
}
