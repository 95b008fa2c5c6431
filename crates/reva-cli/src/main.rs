//! # reva CLI entry point
//!
//! Parses command-line arguments, sets up tracing, opens the file-backed
//! calculation store, and dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reva_cli::calculation::{run_calculation, CalculationCommand};
use reva_cli::resolve_config;
use reva_store::FileStorage;

/// Review assistant calculation store.
///
/// Stores and retrieves reviewer-suggestion calculations keyed by commit id,
/// one JSON file per commit under `<data-dir>/<first 2 chars>/<rest>`.
#[derive(Parser, Debug)]
#[command(name = "reva", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory holding calculations. Defaults to $REVA_DATA_DIR.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: CalculationCommand,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let result = resolve_config(cli.data_dir.as_deref()).and_then(|config| {
        tracing::debug!(data_dir = %config.data_dir().display(), "opening calculation store");
        let storage = FileStorage::from_config(&config);
        run_calculation(&cli.command, &storage, &cwd)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
