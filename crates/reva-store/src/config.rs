//! Store configuration.
//!
//! The data directory is the only setting. It is passed explicitly at
//! construction, or read from `REVA_DATA_DIR`.

use std::path::{Path, PathBuf};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "REVA_DATA_DIR";

/// Configuration for a [`FileStorage`](crate::FileStorage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Root directory for all calculation files. Need not exist yet.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Variables:
    /// - `REVA_DATA_DIR` (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(DATA_DIR_ENV).ok_or(ConfigError::MissingDataDir)?;
        if raw.trim().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        Ok(Self::new(raw))
    }

    /// The configured data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("REVA_DATA_DIR environment variable is required")]
    MissingDataDir,
    #[error("REVA_DATA_DIR must not be empty")]
    EmptyDataDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_data_dir_from_lookup() {
        let cfg = StoreConfig::from_lookup(|name| {
            (name == DATA_DIR_ENV).then(|| "/var/lib/reva".to_string())
        })
        .unwrap();
        assert_eq!(cfg.data_dir(), Path::new("/var/lib/reva"));
    }

    #[test]
    fn missing_data_dir_is_an_error() {
        let err = StoreConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDataDir));
        assert!(format!("{err}").contains("REVA_DATA_DIR"));
    }

    #[test]
    fn blank_data_dir_is_an_error() {
        let err = StoreConfig::from_lookup(|_| Some("  ".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDataDir));
    }
}
