//! Local (in-process) client for the chained grant.

use std::sync::Arc;

use async_trait::async_trait;
use chained_grant_sdk::{
    AuthenticationContext, ChainedGrantClient, ChainedGrantError, DelegationRequest,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed out by the module during `init()`.
pub struct ChainedGrantLocalClient {
    svc: Arc<Service>,
}

impl ChainedGrantLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> ChainedGrantError {
    if e.is_rejection() {
        tracing::warn!(operation = op, error = %e, "chained_grant request rejected");
    } else {
        tracing::error!(operation = op, error = ?e, "chained_grant call failed");
    }
    e.into()
}

#[async_trait]
impl ChainedGrantClient for ChainedGrantLocalClient {
    async fn evaluate(
        &self,
        request: DelegationRequest,
    ) -> Result<AuthenticationContext, ChainedGrantError> {
        self.svc
            .evaluate(&request)
            .await
            .map_err(|e| log_and_convert("evaluate", e))
    }
}
