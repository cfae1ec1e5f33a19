//! Account CRUD execution against SQLite.

use crate::error::AccountError;
use crate::model::{Account, AccountInput};
use crate::sql::{self, ACCOUNTS};
use crate::store::Database;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Data access for accounts. Every method is a single statement; a missing
/// row is reported as [`AccountError::NotFound`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert and return the stored record with its id and timestamps.
    async fn create(&self, input: &AccountInput) -> Result<Account, AccountError>;

    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<Account>, AccountError>;

    async fn get_by_id(&self, id: i64) -> Result<Account, AccountError>;

    /// Replace every mutable field. `updatedAt` keeps its stored value.
    async fn update(&self, id: i64, input: &AccountInput) -> Result<Account, AccountError>;

    async fn delete(&self, id: i64) -> Result<(), AccountError>;
}

pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn create(&self, input: &AccountInput) -> Result<Account, AccountError> {
        let sql = sql::insert(&ACCOUNTS);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.identity)
            .bind(&input.passphrase)
            .bind(&input.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        let sql = sql::select_list(&ACCOUNTS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Account>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Account, AccountError> {
        let sql = sql::select_by_id(&ACCOUNTS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AccountError::NotFound)
    }

    async fn update(&self, id: i64, input: &AccountInput) -> Result<Account, AccountError> {
        let sql = sql::update(&ACCOUNTS);
        tracing::debug!(sql = %sql, id, "query");
        // RETURNING yields no row exactly when no row was affected.
        sqlx::query_as::<_, Account>(&sql)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.identity)
            .bind(&input.passphrase)
            .bind(&input.notes)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AccountError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), AccountError> {
        let sql = sql::delete(&ACCOUNTS);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound);
        }
        Ok(())
    }
}
