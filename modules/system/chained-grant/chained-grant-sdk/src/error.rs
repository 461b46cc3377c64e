//! Error types for the chained grant module.

use thiserror::Error;

use crate::scope::ScopeSet;

/// Errors that can occur when evaluating a chained grant.
#[derive(Debug, Error)]
pub enum ChainedGrantError {
    /// The presented token is absent, unknown, expired, or otherwise invalid.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The requested scopes exceed what the presented token grants.
    ///
    /// `allowed` carries the presented token's granted scopes so the caller
    /// can report what would have been acceptable.
    #[error("{message} (allowed: [{allowed}])")]
    InvalidScope { message: String, allowed: ScopeSet },

    /// No evaluator is registered for the requested grant type.
    #[error("unsupported grant type: {0}")]
    UnsupportedGrantType(String),

    /// A collaborator (token store, client registry) is not reachable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ChainedGrantError {
    /// The OAuth2 error code the token endpoint should report (RFC 6749 §5.2, RFC 6750 §3.1).
    #[must_use]
    pub fn oauth_error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken(_) => "invalid_token",
            Self::InvalidScope { .. } => "invalid_scope",
            Self::UnsupportedGrantType(_) => "unsupported_grant_type",
            Self::ServiceUnavailable(_) => "temporarily_unavailable",
            Self::Internal(_) => "server_error",
        }
    }
}

/// Errors returned by a [`TokenStore`](crate::TokenStore).
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// No token with the given value exists (or it was revoked).
    #[error("access token not found")]
    NotFound,

    /// The token exists but has expired.
    #[error("access token expired")]
    Expired,

    /// The backing store cannot be reached.
    #[error("token store unavailable: {0}")]
    Unavailable(String),

    #[error("token store internal error: {0}")]
    Internal(String),
}

/// Errors returned by a [`ClientRegistry`](crate::ClientRegistry).
#[derive(Debug, Error)]
pub enum ClientRegistryError {
    #[error("client '{0}' not found")]
    ClientNotFound(String),

    /// The backing registry cannot be reached.
    #[error("client registry unavailable: {0}")]
    Unavailable(String),

    #[error("client registry internal error: {0}")]
    Internal(String),
}
