//! Storage seam for the `users` table.
//!
//! Handlers only see [`UserStore`]; `main` injects the PostgreSQL
//! implementation and the integration tests inject [`MemoryUserStore`].

pub mod memory;
pub mod postgres;

use std::io;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::user::{NewUser, User};

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Errors from the storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage is unreachable or the connection dropped.
    #[error("database unavailable: {0}")]
    Connection(String),

    /// The connection settings could not be used (e.g. a malformed `DATABASE_URL`).
    #[error("invalid database configuration: {0}")]
    Configuration(String),

    /// The statement ran but violated a table constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Malformed statement, unexpected column shape, or any other database fault.
    #[error("query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(_) => StoreError::Configuration(err.to_string()),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(err.to_string()),
            sqlx::Error::Database(ref db_err) => {
                // SQLSTATE class 23 is integrity constraint violation
                let is_constraint = db_err
                    .code()
                    .map(|code| code.starts_with("23"))
                    .unwrap_or(false);
                if is_constraint {
                    StoreError::Constraint(db_err.message().to_string())
                } else {
                    StoreError::Query(db_err.message().to_string())
                }
            }
            other => StoreError::Query(other.to_string()),
        }
    }
}

impl From<StoreError> for io::Error {
    fn from(err: StoreError) -> Self {
        let kind = match err {
            StoreError::Configuration(_) => io::ErrorKind::InvalidInput,
            StoreError::Connection(_) => io::ErrorKind::NotConnected,
            StoreError::Constraint(_) | StoreError::Query(_) => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

/// Row access for the `users` table.
///
/// Every call round-trips to the backing store; implementations hold no
/// per-request state.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows, ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Insert a row and return it as stored, including the generated id.
    async fn create_user(&self, new_user: &NewUser) -> Result<User, StoreError>;

    /// The row with the given id, or `None` when there is no such row.
    async fn find_user(&self, id: i32) -> Result<Option<User>, StoreError>;
}
