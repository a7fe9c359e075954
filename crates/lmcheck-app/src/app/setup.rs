use anyhow::{Context, Result};

use lmcheck_llm_api::config::parse_timeout_secs;
use lmcheck_llm_api::{normalize_base_url, ClientConfig};

use crate::cli::Cli;

/// Build the client configuration from the environment and CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<ClientConfig> {
    let env_config = ClientConfig::from_env()
        .context("Failed to read configuration from environment")?;

    apply_cli_overrides(env_config, cli)
}

/// Layer CLI flags over a configuration.
///
/// Precedence: CLI flags > environment > defaults
pub fn apply_cli_overrides(mut config: ClientConfig, cli: &Cli) -> Result<ClientConfig> {
    if let Some(base_url) = &cli.base_url {
        config.base_url = normalize_base_url(base_url);
    }

    if let Some(api_key) = &cli.api_key {
        config.api_key = api_key.clone();
    }

    if let Some(model) = &cli.model {
        config.model = model.clone();
    }

    if let Some(timeout) = &cli.timeout {
        config.timeout = Some(parse_timeout_secs(timeout).context("Invalid --timeout")?);
    }

    if cli.verbose {
        config.verbose = true;
    }

    if cli.log_requests {
        config.log_requests = true;
    }

    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }

    Ok(config)
}
