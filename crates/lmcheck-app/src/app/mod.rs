pub mod chat;
pub mod check;
pub mod setup;

pub use setup::{setup_from_cli, apply_cli_overrides};

use colored::Colorize;

use lmcheck_llm_api::{ClientConfig, OpenAiCompatClient};

use crate::cli::Commands;
use chat::AskOptions;

/// Run one command against the configured server.
///
/// Returns whether it succeeded; failures have already been reported to the
/// user by the time this returns.
pub async fn run(command: &Commands, config: &ClientConfig) -> bool {
    let client = match OpenAiCompatClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.to_string().red());
            return false;
        }
    };

    match command {
        Commands::Check => {
            let report = check::run_connection_check(&client, config).await;
            check::print_summary(&report, config);
            report.all_passed()
        }
        Commands::Hello => chat::run_hello(&client, config).await.is_ok(),
        Commands::Ask { prompt, system, max_tokens, temperature } => {
            let options = AskOptions {
                prompt: prompt.clone(),
                system: system.clone(),
                max_tokens: *max_tokens,
                temperature: *temperature,
            };
            chat::run_ask(&client, config, &options).await.is_ok()
        }
        Commands::Models => chat::run_models(&client).await.is_ok(),
    }
}
