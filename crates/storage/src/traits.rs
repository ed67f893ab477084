//! Storage backend trait abstraction

use async_trait::async_trait;
use msgproc_core::Message;

use crate::error::PersistenceError;

/// Operations on the `MESSAGE` table.
///
/// Each call is one autocommit statement. Dropping the returned future
/// cancels the call.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert `message.text` and `message.key`; returns the id assigned by the store.
    /// `message.id` and `message.status` are ignored.
    async fn create_message(&self, message: &Message) -> Result<i32, PersistenceError>;

    /// Mark every message with `message.key` processed.
    /// Matching no message is not an error.
    async fn update_status_message(&self, message: &Message) -> Result<(), PersistenceError>;

    /// Count all messages regardless of status.
    async fn get_count_message(&self) -> Result<u64, PersistenceError>;

    /// Count messages not yet processed.
    async fn get_processing_count_message(&self) -> Result<u64, PersistenceError>;
}
