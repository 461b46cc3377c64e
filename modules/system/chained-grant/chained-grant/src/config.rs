//! Configuration for the chained grant.

use serde::{Deserialize, Serialize};

/// Configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainedGrantConfig {
    /// Treat a requested scope set that exactly equals the owning client's
    /// registered scopes as an empty request (full inheritance).
    ///
    /// Works around request factories that pre-fill the requested scopes with
    /// the client's registered defaults when the `scope` parameter is absent.
    /// Disable once the upstream layer leaves unset scopes empty.
    pub compensate_shadowed_scopes: bool,
}

impl Default for ChainedGrantConfig {
    fn default() -> Self {
        Self {
            compensate_shadowed_scopes: true,
        }
    }
}
