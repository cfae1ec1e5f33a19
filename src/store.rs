//! Storage handle: owns the SQLite pool and bootstraps the `accounts` table.

use crate::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Path value that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// DDL for the single resource table. Idempotent.
pub const ACCOUNTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    platform TEXT NOT NULL,
    url TEXT NOT NULL,
    identity TEXT NOT NULL,
    passphrase TEXT NOT NULL,
    notes TEXT NOT NULL,
    createdAt DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updatedAt DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Owned connection pool. Built once at startup, handed to the account store,
/// and closed at shutdown.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database at `config.path` and ensure the schema.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = if config.path == IN_MEMORY {
            // Every pooled connection to :memory: is a separate database, so keep exactly one alive.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await?
        } else {
            let opts = SqliteConnectOptions::new()
                .filename(&config.path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5));
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(opts)
                .await?
        };
        let db = Self { pool };
        db.ensure_schema().await?;
        tracing::info!(path = %config.path, "database initialized");
        Ok(db)
    }

    /// In-memory database with the schema applied.
    pub async fn connect_in_memory() -> Result<Self, sqlx::Error> {
        Self::connect(&DatabaseConfig {
            path: IN_MEMORY.into(),
            ..DatabaseConfig::default()
        })
        .await
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        tracing::debug!(sql = %ACCOUNTS_DDL.trim(), "query");
        sqlx::query(ACCOUNTS_DDL).execute(&self.pool).await?;
        Ok(())
    }

    /// Round-trip to the store; used by readiness checks.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for in-flight queries and release every connection.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let db = Database::connect_in_memory().await.unwrap();
        db.ensure_schema().await.unwrap();
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(n, 0);
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn file_database_is_created() {
        let mut path = std::env::temp_dir();
        path.push(format!("account-vault-store-{}.sqlite", std::process::id()));
        let config = DatabaseConfig {
            path: path.display().to_string(),
            ..DatabaseConfig::default()
        };
        let db = Database::connect(&config).await.unwrap();
        assert!(path.exists());
        db.close().await;
        assert!(db.ping().await.is_err());
        let _ = std::fs::remove_file(&path);
    }
}
