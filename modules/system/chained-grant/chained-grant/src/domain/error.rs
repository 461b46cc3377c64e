//! Domain errors for the chained grant.

use chained_grant_sdk::{ChainedGrantError, ClientRegistryError, ScopeSet, TokenStoreError};

use super::scope::ScopeRejection;

/// Message reported with every scope rejection.
pub const INVALID_SCOPE_MESSAGE: &str = "Invalid scope requested in chained request";

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("requested scopes [{requested}] exceed granted scopes [{allowed}]")]
    InvalidScope {
        requested: ScopeSet,
        allowed: ScopeSet,
    },

    #[error("{collaborator} not available: {reason}")]
    CollaboratorUnavailable {
        collaborator: &'static str,
        reason: String,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Whether the error is caused by the request rather than the server.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::InvalidToken(_) | Self::InvalidScope { .. })
    }
}

impl From<ScopeRejection> for DomainError {
    fn from(r: ScopeRejection) -> Self {
        Self::InvalidScope {
            requested: r.requested,
            allowed: r.allowed,
        }
    }
}

impl From<TokenStoreError> for DomainError {
    fn from(e: TokenStoreError) -> Self {
        match e {
            TokenStoreError::NotFound => Self::InvalidToken("access token not found".to_owned()),
            TokenStoreError::Expired => Self::InvalidToken("access token expired".to_owned()),
            TokenStoreError::Unavailable(reason) => Self::CollaboratorUnavailable {
                collaborator: "token store",
                reason,
            },
            TokenStoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<ClientRegistryError> for DomainError {
    fn from(e: ClientRegistryError) -> Self {
        match e {
            ClientRegistryError::ClientNotFound(client_id) => {
                Self::Internal(format!("client '{client_id}' not found"))
            }
            ClientRegistryError::Unavailable(reason) => Self::CollaboratorUnavailable {
                collaborator: "client registry",
                reason,
            },
            ClientRegistryError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for ChainedGrantError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidToken(msg) => Self::InvalidToken(msg),
            DomainError::InvalidScope { allowed, .. } => Self::InvalidScope {
                message: INVALID_SCOPE_MESSAGE.to_owned(),
                allowed,
            },
            e @ DomainError::CollaboratorUnavailable { .. } => {
                Self::ServiceUnavailable(e.to_string())
            }
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn store_misses_become_invalid_token() {
        let not_found: ChainedGrantError = DomainError::from(TokenStoreError::NotFound).into();
        assert!(matches!(not_found, ChainedGrantError::InvalidToken(_)));

        let expired: ChainedGrantError = DomainError::from(TokenStoreError::Expired).into();
        assert!(matches!(expired, ChainedGrantError::InvalidToken(_)));
    }

    #[test]
    fn unavailable_collaborators_map_to_service_unavailable() {
        let err: ChainedGrantError =
            DomainError::from(TokenStoreError::Unavailable("timeout".to_owned())).into();
        match err {
            ChainedGrantError::ServiceUnavailable(msg) => {
                assert_eq!(msg, "token store not available: timeout");
            }
            other => panic!("Expected ServiceUnavailable, got: {other:?}"),
        }

        let err: ChainedGrantError =
            DomainError::from(ClientRegistryError::Unavailable("down".to_owned())).into();
        assert!(matches!(err, ChainedGrantError::ServiceUnavailable(_)));
    }

    #[test]
    fn scope_rejection_keeps_allowed_set_only() {
        let err: ChainedGrantError = DomainError::from(ScopeRejection {
            requested: ScopeSet::from(["a", "c"]),
            allowed: ScopeSet::from(["a", "b"]),
        })
        .into();

        match err {
            ChainedGrantError::InvalidScope { message, allowed } => {
                assert_eq!(message, INVALID_SCOPE_MESSAGE);
                assert_eq!(allowed, ScopeSet::from(["a", "b"]));
            }
            other => panic!("Expected InvalidScope, got: {other:?}"),
        }
    }

    #[test]
    fn rejections_are_distinguished_from_failures() {
        assert!(DomainError::InvalidToken("x".to_owned()).is_rejection());
        assert!(!DomainError::Internal("x".to_owned()).is_rejection());
    }
}
