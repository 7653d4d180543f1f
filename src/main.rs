//! CollabDesk - workspace client
//!
#![doc = "CollabDesk - workspace client"]
#![doc = "Main entry point for the collabdesk command-line application."]

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use collabdesk::cli::Cli;
use collabdesk::commands;
use collabdesk::config::{Config, LoggingConfig};
use collabdesk::credentials::KeyringSessionStore;
use collabdesk::AppContext;

/// Keyring account the CLI saves its session under
const KEYRING_ACCOUNT: &str = "default";

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration (file, then environment, then CLI flags)
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;

    init_tracing(&config.logging);

    let mut ctx = AppContext::new(config).context("Invalid configuration")?;
    if !cli.no_keyring {
        ctx = ctx.with_session_store(Arc::new(KeyringSessionStore::new(KEYRING_ACCOUNT)));
    }

    if commands::needs_session(&cli.command) {
        match ctx.auth().restore_session().await {
            Ok(Some(user)) => tracing::debug!(user_id = %user.id, "Using saved session"),
            Ok(None) => tracing::debug!("No saved session"),
            Err(e) => tracing::warn!("Could not restore saved session: {}", e),
        }
    }

    let result = commands::execute(&ctx, cli.command).await;
    ctx.shutdown().await;
    result?;
    Ok(())
}

/// Initialize tracing subscriber with environment filter
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("collabdesk={}", logging.level)));

    let registry = tracing_subscriber::registry().with(env_filter);
    if logging.json_format {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
