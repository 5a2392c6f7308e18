//! Database connection management
//!
//! Provides database connection pooling, migrations and health checks.

use crate::db::error::DbResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Type alias for the database connection pool
pub type DatabasePool = SqlitePool;

/// Default number of pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database connection wrapper
#[derive(Clone, Debug)]
pub struct DatabaseConnection {
    pool: DatabasePool,
}

impl DatabaseConnection {
    /// Create a new database connection from a connection string
    ///
    /// # Arguments
    /// * `database_url` - SQLite connection string (e.g., "sqlite://todo.db" or "sqlite::memory:")
    ///
    /// The database file is created when it does not exist yet.
    pub async fn new(database_url: &str) -> DbResult<Self> {
        Self::with_max_connections(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Create a new database connection with custom pool size
    ///
    /// # Arguments
    /// * `database_url` - SQLite connection string
    /// * `max_connections` - Maximum number of concurrent connections
    pub async fn with_max_connections(database_url: &str, max_connections: u32) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        tracing::debug!(max_connections, "Opened database pool");
        Ok(Self { pool })
    }

    /// Open a private in-memory database on a single connection.
    ///
    /// sqlx backs `sqlite::memory:` with a shared-cache in-memory database
    /// that is dropped once its last connection closes, so the pool keeps
    /// one connection open that never expires.
    pub async fn in_memory() -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Run the embedded migrations on the database
    pub async fn run_migrations(&self) -> DbResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Perform a health check by running a simple query
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool gracefully
    ///
    /// Closes all connections in the pool. After this is called,
    /// the connection cannot be used anymore.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_connection() {
        let conn = DatabaseConnection::in_memory().await.unwrap();
        assert!(conn.pool().acquire().await.is_ok());
    }

    #[tokio::test]
    async fn test_health_check_success() {
        let conn = DatabaseConnection::in_memory().await.unwrap();
        assert!(conn.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_migrations_create_todos_table() {
        let conn = DatabaseConnection::in_memory().await.unwrap();
        conn.run_migrations().await.unwrap();

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'todos'",
        )
        .fetch_one(conn.pool())
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let conn = DatabaseConnection::in_memory().await.unwrap();
        conn.run_migrations().await.unwrap();
        assert!(conn.run_migrations().await.is_ok());
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.db");
        let url = format!("sqlite://{}", path.display());

        let conn = DatabaseConnection::with_max_connections(&url, 2).await.unwrap();
        conn.health_check().await.unwrap();
        assert!(path.exists());

        conn.close().await;
    }

    #[tokio::test]
    async fn test_close_connection() {
        let conn = DatabaseConnection::in_memory().await.unwrap();
        let pool = conn.pool().clone();

        conn.close().await;
        assert!(pool.is_closed());
    }
}
