use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use lmcheck::{run, setup_from_cli, Cli};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "lmcheck", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let config = setup_from_cli(&cli)?;

    if run(&cli.command_or_default(), &config).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
