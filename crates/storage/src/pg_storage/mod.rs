//! PostgreSQL storage backend using sqlx.

mod messages;

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::StoreConfig;
use crate::error::{PersistenceError, CONNECT_TO_DATABASE, PARSE_CONNECTION_STRING};

/// Message store over a `PgPool`.
///
/// Cheap to clone; clones share the pool, so concurrent callers each get
/// their own connection per statement.
#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgStorage {
    /// Connect using a `postgres://` URL and settings from the environment.
    pub async fn new(database_url: &str) -> Result<Self, PersistenceError> {
        Self::with_config(database_url, &StoreConfig::from_env()).await
    }

    /// Parse `database_url` and connect eagerly.
    pub async fn with_config(
        database_url: &str,
        config: &StoreConfig,
    ) -> Result<Self, PersistenceError> {
        let options = PgConnectOptions::from_str(database_url)
            .map_err(PersistenceError::database(PARSE_CONNECTION_STRING))?;
        Self::connect_with(options, config).await
    }

    /// Connect with already-built options. At least one connection is
    /// established before this returns.
    pub async fn connect_with(
        options: PgConnectOptions,
        config: &StoreConfig,
    ) -> Result<Self, PersistenceError> {
        let host = options.get_host().to_owned();
        let database = options.get_database().map(str::to_owned);
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .test_before_acquire(true)
            .connect_with(options)
            .await
            .map_err(PersistenceError::database(CONNECT_TO_DATABASE))?;
        tracing::info!(
            %host,
            database = database.as_deref().unwrap_or("<default>"),
            max_connections = config.max_connections,
            query_timeout = ?config.query_timeout,
            "PgStorage initialized"
        );
        Ok(Self { pool, query_timeout: config.query_timeout })
    }

    /// Close every pooled connection; later calls fail with a closed-pool error.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("PgStorage pool closed");
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run one database call under this store's query timeout.
    pub(crate) async fn run<T, F>(
        &self,
        context: &'static str,
        call: F,
    ) -> Result<T, PersistenceError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        with_deadline(context, self.query_timeout, call).await
    }
}

pub(crate) async fn with_deadline<T, F>(
    context: &'static str,
    timeout: Duration,
    call: F,
) -> Result<T, PersistenceError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(PersistenceError::database(context)),
        Err(_elapsed) => {
            tracing::warn!(context, ?timeout, "database call exceeded its deadline");
            Err(PersistenceError::Timeout { context, timeout })
        },
    }
}

/// Convert a `COUNT(..)` result to `u64`. Negative counts cannot occur.
pub(crate) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
