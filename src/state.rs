//! Shared application state for all routes.

use crate::service::{AccountService, SqliteAccountStore};
use crate::store::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub accounts: AccountService,
}

impl AppState {
    /// Wire the SQLite-backed account service onto an open database.
    pub fn new(db: Database) -> Self {
        let accounts = AccountService::new(Arc::new(SqliteAccountStore::new(&db)));
        Self { db, accounts }
    }
}
