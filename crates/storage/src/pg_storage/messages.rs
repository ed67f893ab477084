//! MessageStore implementation for PgStorage.

use async_trait::async_trait;
use msgproc_core::Message;

use super::{count_to_u64, PgStorage};
use crate::error::{PersistenceError, INSERT_MESSAGE, QUERY_COUNT_MESSAGE, UPDATE_STATUS_MESSAGE};
use crate::traits::MessageStore;

const QUERY_CREATE_MESSAGE: &str = "INSERT INTO MESSAGE(TEXT, KEY) VALUES ($1, $2) RETURNING ID";

const QUERY_UPDATE_STATUS_MESSAGE: &str = "UPDATE MESSAGE SET STATUS = TRUE WHERE KEY = $1";

const QUERY_GET_COUNT_MESSAGE: &str = "SELECT COUNT(STATUS) FROM MESSAGE";

const QUERY_GET_PROCESSING_COUNT_MESSAGE: &str =
    "SELECT COUNT(STATUS) FROM MESSAGE WHERE STATUS = FALSE";

#[async_trait]
impl MessageStore for PgStorage {
    async fn create_message(&self, message: &Message) -> Result<i32, PersistenceError> {
        let id: i32 = self
            .run(
                INSERT_MESSAGE,
                sqlx::query_scalar::<_, i32>(QUERY_CREATE_MESSAGE)
                    .bind(&message.text)
                    .bind(&message.key)
                    .fetch_one(self.pool()),
            )
            .await?;
        tracing::debug!(id, key = %message.key, "message created");
        Ok(id)
    }

    async fn update_status_message(&self, message: &Message) -> Result<(), PersistenceError> {
        let result = self
            .run(
                UPDATE_STATUS_MESSAGE,
                sqlx::query(QUERY_UPDATE_STATUS_MESSAGE).bind(&message.key).execute(self.pool()),
            )
            .await?;
        tracing::debug!(
            key = %message.key,
            rows_affected = result.rows_affected(),
            "message status updated"
        );
        Ok(())
    }

    async fn get_count_message(&self) -> Result<u64, PersistenceError> {
        let count: i64 = self
            .run(
                QUERY_COUNT_MESSAGE,
                sqlx::query_scalar::<_, i64>(QUERY_GET_COUNT_MESSAGE).fetch_one(self.pool()),
            )
            .await?;
        Ok(count_to_u64(count))
    }

    async fn get_processing_count_message(&self) -> Result<u64, PersistenceError> {
        let count: i64 = self
            .run(
                QUERY_COUNT_MESSAGE,
                sqlx::query_scalar::<_, i64>(QUERY_GET_PROCESSING_COUNT_MESSAGE)
                    .fetch_one(self.pool()),
            )
            .await?;
        Ok(count_to_u64(count))
    }
}
