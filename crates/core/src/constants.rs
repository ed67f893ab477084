//! Shared constants for msgproc.

/// Id carried by a message that has not been stored yet.
pub const UNASSIGNED_MESSAGE_ID: i32 = -1;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Deadline applied to every store operation, in seconds.
pub const QUERY_TIMEOUT_SECS: u64 = 30;

/// Env var overriding [`PG_POOL_MAX_CONNECTIONS`].
pub const ENV_PG_MAX_CONNECTIONS: &str = "MSGPROC_PG_MAX_CONNECTIONS";

/// Env var overriding [`PG_POOL_ACQUIRE_TIMEOUT_SECS`].
pub const ENV_PG_ACQUIRE_TIMEOUT_SECS: &str = "MSGPROC_PG_ACQUIRE_TIMEOUT_SECS";

/// Env var overriding [`PG_POOL_IDLE_TIMEOUT_SECS`].
pub const ENV_PG_IDLE_TIMEOUT_SECS: &str = "MSGPROC_PG_IDLE_TIMEOUT_SECS";

/// Env var overriding [`QUERY_TIMEOUT_SECS`].
pub const ENV_QUERY_TIMEOUT_SECS: &str = "MSGPROC_QUERY_TIMEOUT_SECS";
