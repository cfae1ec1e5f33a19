//! Load config from the environment (optionally seeded from a `.env` file).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl AppConfig {
    /// Read `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, ".env file could not be loaded");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let host = lookup("HOST").unwrap_or(defaults.server.host);
        if host.trim().is_empty() {
            return Err(ConfigError::Empty("HOST"));
        }
        let port = parse_or(&lookup, "PORT", defaults.server.port)?;
        let max_body_bytes = parse_or(&lookup, "MAX_BODY_BYTES", defaults.server.max_body_bytes)?;

        let path = lookup("DB_PATH").unwrap_or(defaults.database.path);
        if path.trim().is_empty() {
            return Err(ConfigError::Empty("DB_PATH"));
        }

        Ok(AppConfig {
            server: ServerConfig {
                host,
                port,
                max_body_bytes,
            },
            database: DatabaseConfig {
                path,
                ..defaults.database
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
