//! Pool and deadline settings for the PostgreSQL store.

use std::time::Duration;

use msgproc_core::{
    env_parse_with_default, ENV_PG_ACQUIRE_TIMEOUT_SECS, ENV_PG_IDLE_TIMEOUT_SECS,
    ENV_PG_MAX_CONNECTIONS, ENV_QUERY_TIMEOUT_SECS, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS, QUERY_TIMEOUT_SECS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    /// Deadline for a single store operation, pool acquisition included.
    pub query_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_connections: PG_POOL_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS),
            query_timeout: Duration::from_secs(QUERY_TIMEOUT_SECS),
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by `MSGPROC_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            max_connections: env_parse_with_default(
                ENV_PG_MAX_CONNECTIONS,
                PG_POOL_MAX_CONNECTIONS,
            )
            .max(1),
            acquire_timeout: Duration::from_secs(env_parse_with_default(
                ENV_PG_ACQUIRE_TIMEOUT_SECS,
                PG_POOL_ACQUIRE_TIMEOUT_SECS,
            )),
            idle_timeout: Duration::from_secs(env_parse_with_default(
                ENV_PG_IDLE_TIMEOUT_SECS,
                PG_POOL_IDLE_TIMEOUT_SECS,
            )),
            query_timeout: Duration::from_secs(env_parse_with_default(
                ENV_QUERY_TIMEOUT_SECS,
                QUERY_TIMEOUT_SECS,
            )),
        }
    }

    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    #[must_use]
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }
}
