//! rTimesheet library root.
//! Exposes the reconciliation engine (`core`), ingestion, export and the CLI
//! dispatcher used by `main.rs`.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use utils::path::expand_tilde;

pub use crate::core::{OvernightPolicy, ReconcileOptions, reconcile, reconcile_by_employee};
pub use errors::ValidationError;
pub use models::{DailyRecord, EventType, RawEvent, ShiftConfig, ShiftKind};

/// Environment variable holding the tracing filter (e.g. `debug`, `rtimesheet=trace`).
pub const LOG_ENV: &str = "RTIMESHEET_LOG";

/// Install the stderr diagnostics subscriber. Defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Shifts => cli::commands::shifts::handle(),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once, honoring --config
    let path: Option<PathBuf> = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(path.as_deref())?;

    dispatch(&cli, &cfg)
}
