//! # File-Backed Calculation Store
//!
//! One file per commit, laid out like git's object directory:
//!
//! ```text
//! {data_dir}/ab/34ef0123…   ← calculation for commit ab34ef0123…
//! ```
//!
//! Each file holds exactly one line of compact JSON (see
//! [`Calculation`](reva_core::Calculation) for the form), UTF-8, no
//! trailing newline.
//!
//! ## Read Rule
//!
//! Only the first line of a file is parsed. Compact `serde_json` output
//! escapes newlines inside strings, so everything this store writes fits on
//! one line; anything after the first line was not written by it.
//!
//! ## Write Rule
//!
//! A store truncates and rewrites the file in place. There is no
//! write-then-rename, so a concurrent reader may see a partial file.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use reva_core::{Calculation, CommitId};

use crate::config::StoreConfig;
use crate::error::StorageError;
use crate::storage::Storage;

/// A calculation store backed by the filesystem.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// The root directory for calculation files.
    data_dir: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet. Prefix directories, and
    /// the root itself, are created on the first
    /// [`store()`](Storage::store) that needs them.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a store from configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    /// Return the root directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding the calculation for `commit_id`.
    pub fn path_for(&self, commit_id: &CommitId) -> PathBuf {
        self.data_dir
            .join(commit_id.prefix())
            .join(commit_id.remainder())
    }

    fn read_first_line(path: &Path) -> std::io::Result<String> {
        let file = fs::File::open(path)?;
        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;
        let end = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(end);
        Ok(line)
    }
}

impl Storage for FileStorage {
    fn try_store(&self, calculation: &Calculation) -> Result<(), StorageError> {
        let path = self.path_for(&calculation.commit_id);
        tracing::debug!(path = %path.display(), "writing calculation");

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let line = serde_json::to_string(calculation)?;
        fs::write(&path, line.as_bytes()).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "stored calculation");
        Ok(())
    }

    fn try_fetch(&self, commit_id: &CommitId) -> Result<Calculation, StorageError> {
        let path = self.path_for(commit_id);
        tracing::debug!(path = %path.display(), "loading calculation");

        let line = match Self::read_first_line(&path) {
            Ok(line) => line,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound {
                    commit_id: commit_id.clone(),
                    path,
                });
            }
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        if line.trim().is_empty() {
            return Err(StorageError::EmptyRecord { path });
        }

        let calculation: Calculation = serde_json::from_str(&line)
            .map_err(|source| StorageError::Deserialize {
                path: path.clone(),
                source,
            })?;

        // The file name encodes the key; the record must agree with it.
        if &calculation.commit_id != commit_id {
            return Err(StorageError::KeyMismatch {
                expected: commit_id.clone(),
                found: calculation.commit_id,
                path,
            });
        }

        tracing::info!(commit_id = %commit_id, "returning calculation");
        Ok(calculation)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
