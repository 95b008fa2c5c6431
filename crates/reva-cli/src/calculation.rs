//! # Calculation Subcommands
//!
//! Store, fetch, and locate calculations. Wraps `reva-store`'s
//! [`FileStorage`] using the fallible `try_*` methods so the CLI can report
//! why an operation failed.
//!
//! ## Exit Codes
//!
//! - `0`: success.
//! - `1`: `fetch` found no calculation for the commit.
//! - errors (bad input, I/O, corrupt record) propagate and exit `1` from
//!   `main` after being logged.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use reva_core::{Calculation, CommitId};
use reva_store::{FileStorage, Storage, StorageError};

/// Calculation subcommands.
#[derive(Subcommand, Debug)]
pub enum CalculationCommand {
    /// Store a calculation read from a JSON file (`-` for stdin).
    Store {
        /// Path to a JSON object with a `commitId` member.
        #[arg(value_name = "FILE")]
        file: std::path::PathBuf,
    },

    /// Print the calculation stored for a commit.
    Fetch {
        /// Commit identifier (e.g. a SHA-1).
        #[arg(value_name = "COMMIT_ID")]
        commit_id: String,
    },

    /// Print the file path a commit's calculation is stored at.
    Path {
        /// Commit identifier (e.g. a SHA-1).
        #[arg(value_name = "COMMIT_ID")]
        commit_id: String,
    },
}

/// Execute a calculation subcommand against `storage`.
pub fn run_calculation(command: &CalculationCommand, storage: &FileStorage, cwd: &Path) -> Result<u8> {
    match command {
        CalculationCommand::Store { file } => cmd_store(storage, file, cwd),
        CalculationCommand::Fetch { commit_id } => cmd_fetch(storage, commit_id),
        CalculationCommand::Path { commit_id } => cmd_path(storage, commit_id),
    }
}

/// Store a calculation from a JSON file.
fn cmd_store(storage: &FileStorage, file: &Path, cwd: &Path) -> Result<u8> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        let resolved = crate::resolve_path(file, cwd);
        if !resolved.exists() {
            bail!("file not found: {}", resolved.display());
        }
        std::fs::read_to_string(&resolved)
            .with_context(|| format!("failed to read file: {}", resolved.display()))?
    };

    let calculation: Calculation = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse calculation JSON: {}", file.display()))?;

    storage
        .try_store(&calculation)
        .with_context(|| format!("could not store calculation {}", calculation.commit_id))?;

    println!(
        "OK: stored calculation commit={} path={}",
        calculation.commit_id,
        storage.path_for(&calculation.commit_id).display()
    );
    Ok(0)
}

/// Print a stored calculation as its single JSON line.
fn cmd_fetch(storage: &FileStorage, commit_id: &str) -> Result<u8> {
    let id = parse_commit_id(commit_id)?;

    match storage.try_fetch(&id) {
        Ok(calculation) => {
            let line = serde_json::to_string(&calculation)?;
            println!("{line}");
            Ok(0)
        }
        Err(StorageError::NotFound { .. }) => {
            println!("NOT FOUND: calculation commit={id}");
            Ok(1)
        }
        Err(e) => bail!("fetch failed: {e}"),
    }
}

/// Print the path a commit's calculation lives at.
fn cmd_path(storage: &FileStorage, commit_id: &str) -> Result<u8> {
    let id = parse_commit_id(commit_id)?;
    println!("{}", storage.path_for(&id).display());
    Ok(0)
}

fn parse_commit_id(s: &str) -> Result<CommitId> {
    CommitId::new(s).map_err(|e| anyhow::anyhow!("invalid commit id: {e}"))
}
