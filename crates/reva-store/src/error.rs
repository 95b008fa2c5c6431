//! # Storage Error Types
//!
//! Structured errors returned by [`Storage::try_store`](crate::Storage::try_store)
//! and [`Storage::try_fetch`](crate::Storage::try_fetch). The infallible
//! `store`/`fetch` methods log these and discard them.

use std::path::PathBuf;

use reva_core::CommitId;
use thiserror::Error;

/// Errors from calculation storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No calculation has been stored for this commit.
    #[error("no calculation stored for {commit_id} at {}", path.display())]
    NotFound {
        /// The requested key.
        commit_id: CommitId,
        /// The path that was probed.
        path: PathBuf,
    },

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The calculation could not be encoded as JSON.
    #[error("could not serialize calculation: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The stored line is not a valid calculation.
    #[error("stored calculation at {} is not valid: {source}", path.display())]
    Deserialize {
        /// The file that was read.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The file exists but its first line is blank.
    #[error("stored calculation at {} is empty", path.display())]
    EmptyRecord {
        /// The file that was read.
        path: PathBuf,
    },

    /// The file parsed, but names a different commit than the one requested.
    #[error("calculation at {} belongs to {found}, expected {expected}", path.display())]
    KeyMismatch {
        /// The requested key.
        expected: CommitId,
        /// The key found in the file.
        found: CommitId,
        /// The file that was read.
        path: PathBuf,
    },
}

impl StorageError {
    /// True if the key was simply never stored.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
