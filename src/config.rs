use std::env;

use thiserror::Error;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set to a production Postgres instance")]
    MissingDatabaseUrl,

    #[error("DATABASE_MAX_CONNECTIONS must be a positive integer, got '{0}'")]
    InvalidMaxConnections(String),
}

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())?;
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            max_connections,
            log_level,
        })
    }
}

fn parse_max_connections(raw: Option<String>) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(DEFAULT_MAX_CONNECTIONS),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ConfigError::InvalidMaxConnections(value)),
        },
    }
}
