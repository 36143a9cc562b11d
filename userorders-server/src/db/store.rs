//! Record store contract
//!
//! One method per operation, parameterized by record kind. Point operations
//! return `Option` so the caller can tell "zero rows" apart from failure.

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{Order, Resource, User};

/// Store failure, carrying a human-readable detail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connection, constraint, or execution error reported by sqlx
    #[error("{}", sqlx_detail(.0))]
    Sqlx(#[from] sqlx::Error),

    /// Statement did not finish within the configured timeout
    #[error("statement timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Path id that cannot be coerced to the key type
    #[error("invalid input syntax for type integer: \"{0}\"")]
    MalformedKey(String),

    /// Path id that is an integer but does not fit the key type
    #[error("value \"{0}\" is out of range for type integer")]
    KeyOutOfRange(String),

    /// Constraint rejected by a non-SQL store
    #[error("{0}")]
    Rejected(String),
}

/// Database errors carry the server's message; everything else uses sqlx's own.
fn sqlx_detail(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_owned(),
        other => other.to_string(),
    }
}

/// Single-statement CRUD over one record kind.
#[async_trait]
pub trait RecordStore<R: Resource>: Send + Sync + 'static {
    /// Every record, in store order.
    async fn list_all(&self) -> Result<Vec<R>, StoreError>;

    /// The record with `id`, or `None` when no row matches.
    async fn get_by_id(&self, id: i32) -> Result<Option<R>, StoreError>;

    /// Insert and return the stored record with its assigned id.
    async fn insert(&self, fields: R::Fields) -> Result<R, StoreError>;

    /// Replace every mutable column; `None` when no row matches.
    async fn replace(&self, id: i32, fields: R::Fields) -> Result<Option<R>, StoreError>;

    /// Delete and return the removed record; `None` when no row matches.
    async fn remove(&self, id: i32) -> Result<Option<R>, StoreError>;
}

/// A store serving both record kinds.
pub trait Gateway: RecordStore<User> + RecordStore<Order> {}

impl<T> Gateway for T where T: RecordStore<User> + RecordStore<Order> {}
