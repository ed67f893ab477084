//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use msgproc_core::Message;

use crate::config::StoreConfig;
use crate::error::PersistenceError;
use crate::memory::InMemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::MessageStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as MessageStore>::$method(s, $($arg),*).await,
            StorageBackend::InMemory(s) => {
                <InMemoryStorage as MessageStore>::$method(s, $($arg),*).await
            },
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    InMemory(InMemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(
        database_url: &str,
        config: &StoreConfig,
    ) -> Result<Self, PersistenceError> {
        Ok(Self::Postgres(PgStorage::with_config(database_url, config).await?))
    }

    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryStorage::new())
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "memory",
        }
    }

    pub async fn close(&self) {
        match self {
            Self::Postgres(s) => s.close().await,
            Self::InMemory(s) => s.close(),
        }
    }
}

#[async_trait]
impl MessageStore for StorageBackend {
    async fn create_message(&self, message: &Message) -> Result<i32, PersistenceError> {
        dispatch!(self, create_message(message))
    }

    async fn update_status_message(&self, message: &Message) -> Result<(), PersistenceError> {
        dispatch!(self, update_status_message(message))
    }

    async fn get_count_message(&self) -> Result<u64, PersistenceError> {
        dispatch!(self, get_count_message())
    }

    async fn get_processing_count_message(&self) -> Result<u64, PersistenceError> {
        dispatch!(self, get_processing_count_message())
    }
}
