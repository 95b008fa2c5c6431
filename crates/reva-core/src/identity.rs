//! # Commit Identifier
//!
//! The storage key for a [`Calculation`](crate::Calculation). A commit id is
//! normally a hex SHA-1, but the store treats it as an opaque string: the
//! first [`PREFIX_LEN`] characters name a directory and the remainder names
//! a file inside it, the same split git uses for its object directory.
//!
//! ## Invariants
//!
//! - At least `PREFIX_LEN + 1` characters, so the file name is never empty.
//! - No `/`, `\` or NUL, so each half is exactly one path segment.
//! - Neither half is `.` or `..`.
//!
//! No canonicalization is performed. `"AB12"` and `"ab12"` are distinct
//! keys; callers must supply consistent casing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of leading characters used as the directory name.
pub const PREFIX_LEN: usize = 2;

/// A validated commit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId {
    value: String,
    /// Byte offset where the remainder starts.
    split: usize,
}

impl CommitId {
    /// Validate and wrap a commit identifier.
    pub fn new(s: &str) -> Result<Self, CoreError> {
        let len = s.chars().count();
        if len <= PREFIX_LEN {
            return Err(CoreError::KeyTooShort {
                min: PREFIX_LEN + 1,
                len,
            });
        }
        if let Some(c) = s.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
            return Err(CoreError::InvalidKeyChar(c));
        }
        let split = s
            .char_indices()
            .nth(PREFIX_LEN)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (prefix, remainder) = s.split_at(split);
        if is_dot_segment(prefix) || is_dot_segment(remainder) {
            return Err(CoreError::DotSegment(s.to_string()));
        }
        Ok(Self {
            value: s.to_string(),
            split,
        })
    }

    /// The full identifier.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The directory half of the key.
    pub fn prefix(&self) -> &str {
        &self.value[..self.split]
    }

    /// The file-name half of the key.
    pub fn remainder(&self) -> &str {
        &self.value[self.split..]
    }
}

fn is_dot_segment(s: &str) -> bool {
    s == "." || s == ".."
}

impl TryFrom<String> for CommitId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<CommitId> for String {
    fn from(id: CommitId) -> Self {
        id.value
    }
}

impl std::str::FromStr for CommitId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
