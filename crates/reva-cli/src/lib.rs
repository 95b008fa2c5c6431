//! # reva-cli — CLI Tool for the Calculation Store
//!
//! Provides the `reva` command-line interface over a
//! [`FileStorage`](reva_store::FileStorage):
//!
//! - `reva store <FILE>`: store a calculation read from a JSON file.
//! - `reva fetch <COMMIT_ID>`: print a stored calculation.
//! - `reva path <COMMIT_ID>`: print where a calculation lives on disk.
//!
//! ```bash
//! reva --data-dir /var/lib/reva store calc.json
//! REVA_DATA_DIR=/var/lib/reva reva fetch ab34ef0123456789abcdef0123456789abcdef01
//! ```

pub mod calculation;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reva_store::StoreConfig;

/// Resolve the store configuration.
///
/// An explicit `--data-dir` wins; otherwise `REVA_DATA_DIR` is required.
pub fn resolve_config(data_dir: Option<&Path>) -> Result<StoreConfig> {
    match data_dir {
        Some(dir) => Ok(StoreConfig::new(dir)),
        None => StoreConfig::from_env().context("no --data-dir given"),
    }
}

/// Resolve a path that may be relative to the current directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
