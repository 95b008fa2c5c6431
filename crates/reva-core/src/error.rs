//! # Error Types
//!
//! Validation errors for the domain types in `reva-core`.

use thiserror::Error;

/// Errors raised while constructing or mutating core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The commit identifier is too short to split into a directory
    /// prefix and a non-empty file name.
    #[error("commit id must be at least {min} characters, got {len}")]
    KeyTooShort {
        /// Minimum accepted length in characters.
        min: usize,
        /// Actual length in characters.
        len: usize,
    },

    /// The commit identifier contains a character that cannot appear in a
    /// single path segment.
    #[error("commit id contains invalid character {0:?}")]
    InvalidKeyChar(char),

    /// The commit identifier would map to a `.` or `..` path component.
    #[error("commit id {0:?} maps to a relative path component")]
    DotSegment(String),

    /// Attempted to set a payload field whose name is reserved for the key.
    #[error("payload field {0:?} is reserved")]
    ReservedField(String),
}
