//! Chained grant module.

use std::sync::{Arc, OnceLock};

use chained_grant_sdk::{ChainedGrantClient, ClientRegistry, TokenStore};
use tracing::info;

use crate::config::ChainedGrantConfig;
use crate::domain::{ChainedGrantLocalClient, Service};

/// Collaborators and configuration the module is initialized with.
pub struct ChainedGrantDeps {
    pub config: ChainedGrantConfig,
    pub token_store: Arc<dyn TokenStore>,
    pub client_registry: Arc<dyn ClientRegistry>,
}

/// Chained grant module.
///
/// Owns the evaluator service once initialized. The service itself holds no
/// mutable state; the collaborators keep their own lifecycle.
pub struct ChainedGrant {
    service: OnceLock<Arc<Service>>,
}

impl Default for ChainedGrant {
    fn default() -> Self {
        Self {
            service: OnceLock::new(),
        }
    }
}

impl ChainedGrant {
    /// Build the evaluator and return the client to register with the token endpoint.
    ///
    /// # Errors
    ///
    /// Fails if the module was already initialized.
    #[tracing::instrument(skip_all, fields(compensate_shadowed_scopes))]
    pub fn init(&self, deps: ChainedGrantDeps) -> anyhow::Result<Arc<dyn ChainedGrantClient>> {
        tracing::Span::current().record(
            "compensate_shadowed_scopes",
            deps.config.compensate_shadowed_scopes,
        );
        info!("Initializing chained_grant");

        let svc = Arc::new(Service::new(
            deps.token_store,
            deps.client_registry,
            deps.config,
        ));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        let api: Arc<dyn ChainedGrantClient> = Arc::new(ChainedGrantLocalClient::new(svc));
        info!(grant_type = api.grant_type(), "Chained grant initialized");
        Ok(api)
    }

    /// The evaluator, once `init` has run.
    #[must_use]
    pub fn service(&self) -> Option<Arc<Service>> {
        self.service.get().cloned()
    }
}
