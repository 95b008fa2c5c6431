//! # reva-core — Foundational Types for the Review Assistant
//!
//! Defines the record the review assistant persists between computing
//! reviewer suggestions and displaying them: a [`Calculation`] keyed by a
//! [`CommitId`].
//!
//! ## Key Design Principles
//!
//! 1. **Newtype for the storage key.** `CommitId` is validated on
//!    construction and on deserialization. Its characters are used
//!    literally as path segments by the store, so no bare strings.
//!
//! 2. **Opaque payload.** Everything in a `Calculation` besides the key is
//!    carried as JSON members and round-tripped verbatim. This crate does
//!    not know what a reviewer suggestion looks like.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `reva-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod calculation;
pub mod error;
pub mod identity;

pub use calculation::{Calculation, COMMIT_ID_FIELD};
pub use error::CoreError;
pub use identity::{CommitId, PREFIX_LEN};
