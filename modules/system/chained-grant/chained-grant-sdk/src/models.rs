//! Domain models for the chained grant module.

use std::collections::HashMap;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::grant::{REDELEGATE_GRANT_TYPE, SCOPE_PARAM, TOKEN_PARAM};
use crate::scope::ScopeSet;

/// The end-user (or service) principal captured when the original token was issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Subject identifier (user name, `sub` claim).
    pub subject: String,
    /// Subject type classification (e.g., "user", "service").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    /// Authorities granted to the subject at authentication time.
    #[serde(default)]
    pub authorities: Vec<String>,
}

impl Principal {
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            subject_type: None,
            authorities: Vec::new(),
        }
    }
}

/// Authentication kept by the token store alongside an issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAuthentication {
    /// Client that requested the original authorization.
    pub client_id: String,
    /// User authentication; absent for client-only tokens (e.g. `client_credentials`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Principal>,
}

/// An access token record as resolved by a [`TokenStore`](crate::TokenStore).
///
/// The opaque token value is the lookup key and is intentionally not part of
/// the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Client the token was issued to.
    pub client_id: String,
    /// Scopes granted to the token.
    pub scope: ScopeSet,
    /// Authentication captured at issuance.
    pub authentication: StoredAuthentication,
    /// Expiration instant; `None` means the token does not expire.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}

impl AccessToken {
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

/// Incoming redelegation request.
///
/// `scopes` is `None` when the request carried no `scope` parameter; both
/// `None` and an empty set mean "inherit everything the token grants".
#[derive(Debug, Clone)]
pub struct DelegationRequest {
    /// The client asking for the new token (already authenticated by the endpoint).
    pub client_id: String,
    /// The presented access token value. Wrapped in `SecretString` so `Debug` redacts it.
    pub token: SecretString,
    /// Requested scopes for the new token.
    pub scopes: Option<ScopeSet>,
}

impl DelegationRequest {
    #[must_use]
    pub fn new(client_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            token: SecretString::from(token.into()),
            scopes: None,
        }
    }

    #[must_use]
    pub fn with_scopes(mut self, scopes: ScopeSet) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Build a request from token endpoint parameters.
    ///
    /// Reads the `token` and `scope` parameters. A missing `token` becomes an
    /// empty value, which the evaluator rejects as an invalid token.
    #[must_use]
    pub fn from_parameters<S: std::hash::BuildHasher>(
        client_id: impl Into<String>,
        params: &HashMap<String, String, S>,
    ) -> Self {
        let token = params.get(TOKEN_PARAM).cloned().unwrap_or_default();
        let scopes = params.get(SCOPE_PARAM).map(|raw| ScopeSet::parse(raw));
        Self {
            client_id: client_id.into(),
            token: SecretString::from(token),
            scopes,
        }
    }
}

/// How the output scope set of an approved request was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeResolution {
    /// No scopes were requested; the new token inherits every granted scope.
    Inherited,
    /// The request equalled the owning client's registered scopes and was
    /// treated as empty (pre-filled by an upstream request factory).
    ShadowCorrected,
    /// An explicit subset of the granted scopes was requested.
    Narrowed,
}

/// Approved authentication handed to the token-minting step.
///
/// Produced fresh for each accepted request. The scope set is always a subset
/// of the presented token's granted scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationContext {
    client_id: String,
    grant_type: String,
    approved: bool,
    scopes: ScopeSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<Principal>,
    delegated_from: String,
    scope_resolution: ScopeResolution,
}

impl AuthenticationContext {
    /// Create a new `AuthenticationContext` builder
    #[must_use]
    pub fn builder() -> AuthenticationContextBuilder {
        AuthenticationContextBuilder::default()
    }

    /// Client the new token will be issued to.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    #[must_use]
    pub fn grant_type(&self) -> &str {
        &self.grant_type
    }

    /// Whether the request is pre-approved (no further user interaction).
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.approved
    }

    #[must_use]
    pub fn scopes(&self) -> &ScopeSet {
        &self.scopes
    }

    /// The end-user carried over from the presented token.
    #[must_use]
    pub fn user(&self) -> Option<&Principal> {
        self.user.as_ref()
    }

    /// Client that owns the presented token.
    #[must_use]
    pub fn delegated_from(&self) -> &str {
        &self.delegated_from
    }

    #[must_use]
    pub fn scope_resolution(&self) -> ScopeResolution {
        self.scope_resolution
    }

    #[must_use]
    pub fn into_scopes(self) -> ScopeSet {
        self.scopes
    }
}

pub struct AuthenticationContextBuilder {
    client_id: String,
    grant_type: String,
    approved: bool,
    scopes: ScopeSet,
    user: Option<Principal>,
    delegated_from: String,
    scope_resolution: ScopeResolution,
}

impl Default for AuthenticationContextBuilder {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            grant_type: REDELEGATE_GRANT_TYPE.to_owned(),
            approved: false,
            scopes: ScopeSet::new(),
            user: None,
            delegated_from: String::new(),
            scope_resolution: ScopeResolution::Inherited,
        }
    }
}

impl AuthenticationContextBuilder {
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    #[must_use]
    pub fn grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = grant_type.into();
        self
    }

    #[must_use]
    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    #[must_use]
    pub fn scopes(mut self, scopes: ScopeSet) -> Self {
        self.scopes = scopes;
        self
    }

    #[must_use]
    pub fn user(mut self, user: Option<Principal>) -> Self {
        self.user = user;
        self
    }

    #[must_use]
    pub fn delegated_from(mut self, client_id: impl Into<String>) -> Self {
        self.delegated_from = client_id.into();
        self
    }

    #[must_use]
    pub fn scope_resolution(mut self, resolution: ScopeResolution) -> Self {
        self.scope_resolution = resolution;
        self
    }

    #[must_use]
    pub fn build(self) -> AuthenticationContext {
        AuthenticationContext {
            client_id: self.client_id,
            grant_type: self.grant_type,
            approved: self.approved,
            scopes: self.scopes,
            user: self.user,
            delegated_from: self.delegated_from,
            scope_resolution: self.scope_resolution,
        }
    }
}
