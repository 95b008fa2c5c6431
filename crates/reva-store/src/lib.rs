//! # reva-store — Calculation Storage
//!
//! Persists [`Calculation`](reva_core::Calculation) records between the
//! step that computes reviewer suggestions and the step that displays them.
//!
//! - [`Storage`] is the capability: `store` and `fetch`, plus `try_*`
//!   variants that report why an operation failed.
//! - [`FileStorage`] keeps one single-line JSON file per commit under
//!   `<data_dir>/<first two chars>/<rest>`.
//! - [`StoreConfig`] carries the data directory.
//!
//! ## Failure Contract
//!
//! `store` and `fetch` never return an error. Failures are logged at
//! `error` level and become a no-op or `None`. A caller that needs to tell
//! "never stored" from "corrupted" from "I/O failure" uses `try_store` /
//! `try_fetch` instead.
//!
//! ## Crate Policy
//!
//! - Blocking `std::fs` only. No locking, no temp-file rename: concurrent
//!   writers to one key race and the last one wins.
//! - No `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod file;
pub mod storage;

pub use config::{ConfigError, StoreConfig, DATA_DIR_ENV};
pub use error::StorageError;
pub use file::FileStorage;
pub use storage::Storage;
