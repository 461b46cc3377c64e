//! Configuration for the static grant store plugin.

use chained_grant_sdk::Principal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticGrantStorePluginConfig {
    /// Registered clients.
    pub clients: Vec<ClientConfig>,

    /// Issued access tokens.
    pub tokens: Vec<TokenConfig>,
}

/// A registered client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub client_id: String,
    /// Scopes the client is registered with.
    #[serde(default)]
    pub scope: Vec<String>,
}

/// An issued access token.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    /// The opaque token value presented by clients.
    pub token: String,
    /// Client the token was issued to.
    pub client_id: String,
    /// Granted scopes.
    #[serde(default)]
    pub scope: Vec<String>,
    /// End-user the token was issued for; omit for client-only tokens.
    #[serde(default)]
    pub user: Option<Principal>,
    /// Expiration instant (RFC 3339). Omit for non-expiring tokens.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}
