//! Grant-type dispatch.
//!
//! Token endpoints route a request to the evaluator registered for its
//! `grant_type` parameter. The redelegation evaluator answers to
//! [`REDELEGATE_GRANT_TYPE`](chained_grant_sdk::REDELEGATE_GRANT_TYPE) only.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;

use chained_grant_sdk::{
    AuthenticationContext, ChainedGrantClient, ChainedGrantError, DelegationRequest,
};
use tracing::debug;

/// Routes grant requests to the client registered for their grant type.
#[derive(Default)]
pub struct GrantDispatcher {
    granters: HashMap<String, Arc<dyn ChainedGrantClient>>,
}

impl GrantDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client under its own grant type.
    ///
    /// Returns the client previously registered for that grant type, if any.
    pub fn register(
        &mut self,
        client: Arc<dyn ChainedGrantClient>,
    ) -> Option<Arc<dyn ChainedGrantClient>> {
        let grant_type = client.grant_type().to_owned();
        self.granters.insert(grant_type, client)
    }

    #[must_use]
    pub fn supports(&self, grant_type: &str) -> bool {
        self.granters.contains_key(grant_type)
    }

    /// Dispatch a token request.
    ///
    /// `params` are the token endpoint's request parameters; `token` and
    /// `scope` are read from them.
    ///
    /// # Errors
    ///
    /// - `UnsupportedGrantType` if nothing is registered for `grant_type`
    /// - any error returned by the selected client
    #[tracing::instrument(skip_all, fields(grant_type = %grant_type, client_id = %client_id))]
    pub async fn grant<S: BuildHasher>(
        &self,
        grant_type: &str,
        client_id: &str,
        params: &HashMap<String, String, S>,
    ) -> Result<AuthenticationContext, ChainedGrantError> {
        let Some(granter) = self.granters.get(grant_type) else {
            debug!("No granter registered");
            return Err(ChainedGrantError::UnsupportedGrantType(
                grant_type.to_owned(),
            ));
        };

        let request = DelegationRequest::from_parameters(client_id, params);
        granter.evaluate(request).await
    }
}
