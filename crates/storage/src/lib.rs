//! Storage layer for msgproc
//!
//! A single `MESSAGE` table behind the [`MessageStore`] trait, with a
//! PostgreSQL implementation and an in-memory one for tests and embedding.

mod backend;
mod config;
mod error;
mod memory;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod types;

pub use backend::StorageBackend;
pub use config::StoreConfig;
pub use error::PersistenceError;
pub use memory::InMemoryStorage;
pub use msgproc_core::Message;
pub use pg_storage::PgStorage;
pub use traits::MessageStore;
pub use types::MessageStats;
