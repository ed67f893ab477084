//! The unit of work tracked by the message store.

use serde::{Deserialize, Serialize};

use crate::UNASSIGNED_MESSAGE_ID;

/// A message awaiting (or done with) processing.
///
/// `id` is assigned by the store; a message built by a caller carries
/// [`UNASSIGNED_MESSAGE_ID`] until it has been created. `key` is the
/// correlation key used to mark the message processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub text: String,
    pub key: String,
    /// `false` while pending, `true` once processed.
    pub status: bool,
}

impl Message {
    /// A pending, not yet stored message.
    pub fn new(text: impl Into<String>, key: impl Into<String>) -> Self {
        Self { id: UNASSIGNED_MESSAGE_ID, text: text.into(), key: key.into(), status: false }
    }

    /// A message addressing existing rows by `key` only, as used for status updates.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self::new(String::new(), key)
    }

    pub fn is_stored(&self) -> bool {
        self.id != UNASSIGNED_MESSAGE_ID
    }

    pub fn is_processed(&self) -> bool {
        self.status
    }
}
