//! Typed error for the storage layer.
//!
//! Every failure carries the operation that produced it, so callers can log
//! "failed to insert message: <cause>" without losing the underlying
//! `sqlx::Error` for inspection.

use std::time::Duration;

use thiserror::Error;

pub(crate) const PARSE_CONNECTION_STRING: &str = "failed to parse connection string";
pub(crate) const CONNECT_TO_DATABASE: &str = "failed to connect to database";
pub(crate) const INSERT_MESSAGE: &str = "failed to insert message";
pub(crate) const UPDATE_STATUS_MESSAGE: &str = "failed to update status message";
pub(crate) const QUERY_COUNT_MESSAGE: &str = "failed to query count message";

/// Failure originating from the backing data store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// SQL, connection, or decode failure.
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The operation did not finish within the store's query timeout.
    #[error("{context}: deadline of {timeout:?} exceeded")]
    Timeout { context: &'static str, timeout: Duration },
}

impl PersistenceError {
    pub(crate) fn database(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Database { context, source }
    }

    /// Short description of the operation that failed.
    pub fn context(&self) -> &'static str {
        match self {
            Self::Database { context, .. } | Self::Timeout { context, .. } => context,
        }
    }

    /// Whether this error is likely transient (worth retrying by the caller).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Database { source: sqlx::Error::PoolTimedOut | sqlx::Error::Io(_), .. }
        )
    }

    /// Whether this error is a unique-constraint violation (SQLSTATE 23505).
    pub fn is_duplicate(&self) -> bool {
        match self {
            Self::Database { source: sqlx::Error::Database(db_err), .. } => {
                db_err.code().is_some_and(|c| c == "23505")
            },
            _ => false,
        }
    }
}
