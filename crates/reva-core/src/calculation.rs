//! # Calculation Record
//!
//! A computed reviewer-suggestion result for one commit. The store only
//! cares about the key; every other member is opaque payload that is
//! written and read back unchanged.
//!
//! ## JSON Form
//!
//! ```json
//! {"commitId":"ab34ef…","reviewers":[…],"totalReviewTime":42}
//! ```
//!
//! Payload members are flattened into the same object as `commitId` and
//! ordered by name when serialized.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::identity::CommitId;

/// JSON member name holding the key.
pub const COMMIT_ID_FIELD: &str = "commitId";

/// A reviewer-suggestion result keyed by the commit it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The storage key.
    #[serde(rename = "commitId")]
    pub commit_id: CommitId,

    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Calculation {
    /// Create a calculation with an empty payload.
    pub fn new(commit_id: CommitId) -> Self {
        Self {
            commit_id,
            payload: Map::new(),
        }
    }

    /// Create a calculation from an existing payload object.
    ///
    /// Fails if the payload already carries a `commitId` member.
    pub fn with_payload(commit_id: CommitId, payload: Map<String, Value>) -> Result<Self, CoreError> {
        if payload.contains_key(COMMIT_ID_FIELD) {
            return Err(CoreError::ReservedField(COMMIT_ID_FIELD.to_string()));
        }
        Ok(Self {
            commit_id,
            payload,
        })
    }

    /// Builder-style variant of [`insert`](Calculation::insert).
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Result<Self, CoreError> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Set a payload member, returning the previous value if any.
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>, CoreError> {
        if name == COMMIT_ID_FIELD {
            return Err(CoreError::ReservedField(name.to_string()));
        }
        Ok(self.payload.insert(name.to_string(), value.into()))
    }

    /// Look up a payload member.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// All payload members.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}
