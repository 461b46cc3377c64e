//! Evaluate a single chained grant against a configured token store.

mod config;
mod wiring;

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chained_grant_sdk::{REDELEGATE_GRANT_TYPE, SCOPE_PARAM, TOKEN_PARAM};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chained-grant", about = "Evaluate a chained (redelegation) grant")]
struct Cli {
    /// Path to YAML configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grant type to dispatch
    #[arg(long, default_value = REDELEGATE_GRANT_TYPE)]
    grant_type: String,

    /// Client requesting the new token
    #[arg(long)]
    client_id: String,

    /// Presented access token value
    #[arg(long)]
    token: String,

    /// Space-delimited scopes for the new token; omit to inherit all
    #[arg(long)]
    scope: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the JSON result.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::load(cli.config.as_deref())?;
    tracing::debug!(
        clients = cfg.static_store.clients.len(),
        tokens = cfg.static_store.tokens.len(),
        "Configuration loaded"
    );
    let dispatcher = wiring::build_dispatcher(&cfg)?;

    let mut params = HashMap::from([(TOKEN_PARAM.to_owned(), cli.token)]);
    if let Some(scope) = cli.scope {
        params.insert(SCOPE_PARAM.to_owned(), scope);
    }

    match dispatcher
        .grant(&cli.grant_type, &cli.client_id, &params)
        .await
    {
        Ok(ctx) => {
            println!("{}", serde_json::to_string_pretty(&ctx)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let body = serde_json::json!({
                "error": e.oauth_error_code(),
                "error_description": e.to_string(),
            });
            eprintln!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
