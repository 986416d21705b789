use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;

/// A named, timestamped unit of work passed through a queue.
///
/// The queue adapters never look inside a message; they only move its serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    name: String,
    payload: Vec<Value>,
    metadata: BTreeMap<String, Value>,
    timestamp: DateTime<Utc>,
}

impl Message {
    #[must_use]
    pub fn with_current_time(
        name: impl Into<String>,
        payload: Vec<Value>,
        metadata: BTreeMap<String, Value>,
    ) -> Self {
        Self::with_timestamp(name, payload, metadata, Utc::now())
    }

    #[must_use]
    pub fn with_timestamp(
        name: impl Into<String>,
        payload: Vec<Value>,
        metadata: BTreeMap<String, Value>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            payload,
            metadata,
            timestamp,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn payload(&self) -> &[Value] {
        &self.payload
    }

    #[must_use]
    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// # Errors
    ///
    /// Returns an error if the message cannot be encoded as JSON.
    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns [`crate::errors::QueueError::InvalidMessage`] if `serialized` is not a message
    /// produced by [`Message::serialize`].
    pub fn rehydrate(serialized: &str) -> Result<Self> {
        Ok(serde_json::from_str(serialized)?)
    }
}
