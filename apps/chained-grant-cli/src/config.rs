//! Application configuration.
//!
//! Layers, lowest precedence first: built-in defaults, the YAML file, then
//! `CHAINED_GRANT__`-prefixed environment variables (`__` separates nesting,
//! e.g. `CHAINED_GRANT__CHAINED_GRANT__COMPENSATE_SHADOWED_SCOPES=false`).

use std::path::Path;

use chained_grant::ChainedGrantConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use static_grant_store_plugin::config::StaticGrantStorePluginConfig;

const ENV_PREFIX: &str = "CHAINED_GRANT__";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub chained_grant: ChainedGrantConfig,
    pub static_store: StaticGrantStorePluginConfig,
}

/// Load configuration from an optional YAML file plus environment overrides.
///
/// # Errors
///
/// Fails if the file cannot be read or a layer does not match [`AppConfig`].
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if let Some(path) = path {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }
    extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

fn extract(figment: Figment) -> anyhow::Result<AppConfig> {
    Ok(figment.extract()?)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
chained_grant:
  compensate_shadowed_scopes: false
static_store:
  clients:
    - client_id: portal
      scope: [a, b]
  tokens:
    - token: tok
      client_id: portal
      scope: [a]
      user:
        subject: alice
      expires_at: "2030-01-01T00:00:00Z"
"#;

    #[test]
    fn defaults_without_file() {
        let cfg = extract(Figment::from(Serialized::defaults(AppConfig::default()))).unwrap();
        assert!(cfg.chained_grant.compensate_shadowed_scopes);
        assert!(cfg.static_store.tokens.is_empty());
    }

    #[test]
    fn yaml_layer_overrides_defaults() {
        let cfg = extract(
            Figment::from(Serialized::defaults(AppConfig::default())).merge(Yaml::string(SAMPLE)),
        )
        .unwrap();

        assert!(!cfg.chained_grant.compensate_shadowed_scopes);
        assert_eq!(cfg.static_store.clients.len(), 1);
        assert_eq!(cfg.static_store.tokens[0].scope, vec!["a".to_owned()]);
        assert!(cfg.static_store.tokens[0].expires_at.is_some());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res = extract(
            Figment::from(Serialized::defaults(AppConfig::default()))
                .merge(Yaml::string("chained_grant:\n  revoke_original: true\n")),
        );
        assert!(res.is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let cfg = load(Some(file.path())).unwrap();
        assert_eq!(cfg.static_store.tokens.len(), 1);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load(Some(Path::new("/nonexistent/chained-grant.yaml"))).is_err());
    }
}
