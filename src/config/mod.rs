use std::env;

use thiserror::Error;

/// Address the HTTP server binds to. Only the port is configurable.
pub const SERVER_HOST: &str = "0.0.0.0";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://users.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

impl Config {
    /// Read configuration from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_values(env::var("APP_PORT").ok(), env::var("DATABASE_URL").ok())
    }

    /// Build configuration from raw values; blank values fall back to defaults.
    pub fn from_values(
        port: Option<String>,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let server_port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
        };

        let database_url = database_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            server_port,
            database_url,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", SERVER_HOST, self.server_port)
    }
}
