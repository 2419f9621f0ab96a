use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use maeum_infrastructure::ConfigService;
use maeum_interaction::{BackendConfig, HttpAnalysisClient};

mod commands;
mod helper;
mod input;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "maeum")]
#[command(about = "MAEUM - Children's drawing mind analysis", long_about = None)]
struct Cli {
    /// Base URL of the analysis backend (overrides MAEUM_API_URL and config.toml)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Path to config.toml (defaults to ~/.config/maeum/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Run,
    /// Analyze drawings once and print the result
    Analyze {
        /// Persona number (1-4), name or key, e.g. "pico"
        #[arg(long, short)]
        persona: String,
        /// Drawings to analyze; only the first four are used
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Maps the outcome of a command onto the process exit status.
fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let root = config_service
        .get_config()
        .context("Failed to load configuration")?;

    let _log_guard = logging::init(root.log_level.as_deref())?;

    let backend = BackendConfig::resolve(cli.backend_url.as_deref(), &root);
    tracing::info!(
        backend = %backend.base_url,
        timeout = ?backend.request_timeout,
        "Starting maeum"
    );
    let client = Arc::new(HttpAnalysisClient::from_config(&backend));

    let succeeded = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            commands::repl::run(client, &backend).await?;
            true
        }
        Commands::Analyze { persona, files } => {
            commands::analyze::run(client, &persona, &files).await?
        }
    };

    // Returning instead of exiting lets `_log_guard` flush the log file.
    Ok(exit_code(succeeded))
}
