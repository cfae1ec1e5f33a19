//! Account vault: CRUD REST backend for stored credential accounts, on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AccountError, AppError, ConfigError};
pub use model::{Account, AccountInput};
pub use response::{error_body, message_body, success_created, success_ok};
pub use routes::{account_routes, app, common_routes};
pub use service::{AccountService, AccountStore, SqliteAccountStore};
pub use state::AppState;
pub use store::Database;
