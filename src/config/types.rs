//! Config types with their documented defaults.

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DB_PATH: &str = "./accounts.db";
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "account_vault=info,tower_http=info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Env: `HOST`.
    pub host: String,
    /// Env: `PORT`.
    pub port: u16,
    /// Env: `MAX_BODY_BYTES`.
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:`. Env: `DB_PATH`.
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DB_PATH.into(),
            max_connections: 5,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}
