//! In-process message store with the same semantics as the `MESSAGE` table.
//!
//! Ids start at 1 and increase by one per insert, like a `serial` column.
//! After [`InMemoryStorage::close`] every operation fails with
//! `sqlx::Error::PoolClosed`, which lets callers exercise their error paths
//! without a database.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use msgproc_core::Message;

use crate::error::{PersistenceError, INSERT_MESSAGE, QUERY_COUNT_MESSAGE, UPDATE_STATUS_MESSAGE};
use crate::traits::MessageStore;

#[derive(Clone, Debug, Default)]
pub struct InMemoryStorage {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Mutex<Vec<Message>>,
    closed: AtomicBool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored message with `id`, if any.
    pub fn get(&self, id: i32) -> Option<Message> {
        self.rows().iter().find(|m| m.id == id).cloned()
    }

    /// All stored messages in insertion order.
    pub fn messages(&self) -> Vec<Message> {
        self.rows().clone()
    }

    /// Reject all further operations, as a closed pool would.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
    }

    fn rows(&self) -> MutexGuard<'_, Vec<Message>> {
        self.inner.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_open(&self, context: &'static str) -> Result<(), PersistenceError> {
        if self.inner.closed.load(Ordering::Acquire) {
            return Err(PersistenceError::database(context)(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn count_where(&self, pred: impl Fn(&Message) -> bool) -> u64 {
        let count = self.rows().iter().filter(|m| pred(m)).count();
        u64::try_from(count).unwrap_or(u64::MAX)
    }
}

#[async_trait]
impl MessageStore for InMemoryStorage {
    async fn create_message(&self, message: &Message) -> Result<i32, PersistenceError> {
        self.ensure_open(INSERT_MESSAGE)?;
        let mut rows = self.rows();
        let id = rows
            .last()
            .map_or(Some(1), |last| last.id.checked_add(1))
            .ok_or_else(|| {
                PersistenceError::database(INSERT_MESSAGE)(sqlx::Error::Protocol(
                    "message id sequence exhausted".to_owned(),
                ))
            })?;
        rows.push(Message {
            id,
            text: message.text.clone(),
            key: message.key.clone(),
            status: false,
        });
        tracing::debug!(id, key = %message.key, "message created");
        Ok(id)
    }

    async fn update_status_message(&self, message: &Message) -> Result<(), PersistenceError> {
        self.ensure_open(UPDATE_STATUS_MESSAGE)?;
        let mut rows_affected = 0_u64;
        for row in self.rows().iter_mut().filter(|m| m.key == message.key) {
            row.status = true;
            rows_affected = rows_affected.saturating_add(1);
        }
        tracing::debug!(key = %message.key, rows_affected, "message status updated");
        Ok(())
    }

    async fn get_count_message(&self) -> Result<u64, PersistenceError> {
        self.ensure_open(QUERY_COUNT_MESSAGE)?;
        Ok(self.count_where(|_| true))
    }

    async fn get_processing_count_message(&self) -> Result<u64, PersistenceError> {
        self.ensure_open(QUERY_COUNT_MESSAGE)?;
        Ok(self.count_where(|m| !m.status))
    }
}
