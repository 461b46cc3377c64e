//! Assembles the store plugin, the chained grant module, and the dispatcher.

use std::sync::Arc;

use chained_grant::{ChainedGrant, ChainedGrantDeps, GrantDispatcher};
use static_grant_store_plugin::StaticGrantStore;

use crate::config::AppConfig;

/// Build a dispatcher with the chained grant registered.
///
/// # Errors
///
/// Fails if module initialization fails.
pub fn build_dispatcher(cfg: &AppConfig) -> anyhow::Result<GrantDispatcher> {
    let store = Arc::new(StaticGrantStore::from_config(&cfg.static_store));

    let module = ChainedGrant::default();
    let api = module.init(ChainedGrantDeps {
        config: cfg.chained_grant.clone(),
        token_store: store.clone(),
        client_registry: store,
    })?;

    let mut dispatcher = GrantDispatcher::new();
    dispatcher.register(api);
    Ok(dispatcher)
}
