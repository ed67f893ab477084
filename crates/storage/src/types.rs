//! Storage types shared across modules

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::traits::MessageStore;

/// Message counters for monitoring and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStats {
    pub total: u64,
    pub pending: u64,
    pub processed: u64,
}

impl MessageStats {
    /// Read both counters from `store`.
    ///
    /// The two counts are separate statements, not a snapshot; a message
    /// created in between may make `processed` undercount by one.
    pub async fn collect<S>(store: &S) -> Result<Self, PersistenceError>
    where
        S: MessageStore + ?Sized,
    {
        let total = store.get_count_message().await?;
        let pending = store.get_processing_count_message().await?;
        Ok(Self { total, pending, processed: total.saturating_sub(pending) })
    }
}
