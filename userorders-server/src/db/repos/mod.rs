//! PostgreSQL record stores
//!
//! Each operation is exactly one statement with positional parameters.
//! Mutations use `RETURNING` so the stored row comes back in the same round trip,
//! and `fetch_optional` turns "zero rows" into `None`.

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;

use super::StoreError;

pub mod orders;
pub mod users;

/// Gateway over a shared PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgGateway {
    pool: PgPool,
    statement_timeout: Duration,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            statement_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_statement_timeout(mut self, timeout: Duration) -> Self {
        self.statement_timeout = timeout;
        self
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run one statement under the statement timeout.
    async fn timed<T, F>(&self, statement: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        match tokio::time::timeout(self.statement_timeout, statement).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => {
                tracing::warn!(timeout = ?self.statement_timeout, "statement timed out");
                Err(StoreError::Timeout(self.statement_timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    use crate::db::RecordStore;
    use crate::models::User;

    // Lazy pools never connect until a statement runs
    fn unreachable_pool() -> PgPool {
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://userorders@127.0.0.1:1/userorders")
            .expect("valid connection string")
    }

    #[tokio::test]
    async fn statement_past_timeout_is_failure() {
        let gateway =
            PgGateway::new(unreachable_pool()).with_statement_timeout(Duration::from_millis(10));

        let err = gateway
            .timed(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, sqlx::Error>(())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Timeout(_)));
    }

    #[tokio::test]
    async fn unreachable_database_is_store_error() {
        let gateway = PgGateway::new(unreachable_pool());
        let result = RecordStore::<User>::list_all(&gateway).await;
        assert!(result.is_err());
    }
}
