//! Public API trait for the chained grant.
//!
//! This trait defines the interface a token endpoint's grant dispatcher uses
//! to evaluate redelegation requests. The module implements it over the
//! evaluator and the injected collaborators.

use async_trait::async_trait;

use crate::error::ChainedGrantError;
use crate::grant::REDELEGATE_GRANT_TYPE;
use crate::models::{AuthenticationContext, DelegationRequest};

/// Public API trait for the chained grant.
///
/// ```ignore
/// let ctx = chained.evaluate(DelegationRequest::new("service-b", token)).await?;
/// minter.issue(ctx).await?;
/// ```
///
/// # Security
///
/// The returned context never carries scopes beyond those granted to the
/// presented token, and the presented token is left untouched (chaining is
/// additive, not a transfer).
#[async_trait]
pub trait ChainedGrantClient: Send + Sync {
    /// Grant type this client answers to.
    fn grant_type(&self) -> &str {
        REDELEGATE_GRANT_TYPE
    }

    /// Evaluate a redelegation request.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the presented token is empty, unknown, or expired
    /// - `InvalidScope` if the requested scopes exceed the token's granted scopes
    /// - `ServiceUnavailable` if a collaborator cannot be reached
    /// - `Internal` for unexpected errors
    async fn evaluate(
        &self,
        request: DelegationRequest,
    ) -> Result<AuthenticationContext, ChainedGrantError>;
}
