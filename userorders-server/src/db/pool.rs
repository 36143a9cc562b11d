//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool bounds the
//! number of in-flight statements; callers past the bound wait for a lease.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::PgGateway;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Pool sizing and timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum pooled connections
    pub max_connections: u32,

    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,

    /// Upper bound on a single statement, enforced by the gateway
    pub statement_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(5),
            statement_timeout: Duration::from_secs(10),
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/userorders", &PoolConfig::default()).await?;
/// ```
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Connect and wrap the pool in a gateway using the configured statement timeout.
pub async fn connect(database_url: &str, config: &PoolConfig) -> Result<PgGateway, sqlx::Error> {
    let pool = create_pool(database_url, config).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(PgGateway::new(pool).with_statement_timeout(config.statement_timeout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.statement_timeout, Duration::from_secs(10));
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p userorders-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, &PoolConfig::default())
            .await
            .expect("pool creation failed");

        // More tasks than connections; the extra ones wait for a lease
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
