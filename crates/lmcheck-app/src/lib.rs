//! lmcheck application library
//!
//! Command line front end over `lmcheck-llm-api`: the connection check and the
//! one-shot prompt commands.

// Re-export workspace crates
pub use lmcheck_models as models;
pub use lmcheck_llm_api as llm_api;

// Local modules
pub mod cli;
pub mod app;

// Re-exports from local modules
pub use cli::{Cli, Commands};
pub use app::{run, setup_from_cli, apply_cli_overrides};
pub use app::check::{run_connection_check, CheckReport, CheckStatus};
pub use app::chat::{run_ask, run_hello, run_models, AskOptions};
