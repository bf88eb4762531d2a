use std::fmt::Display;
use std::str::FromStr;

use crate::startup::StartupError;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

/// Database connection settings, assembled from discrete `DB_*` variables.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Maximum simultaneous pool connections (default: `10`).
    pub pool_max: u32,
}

impl DatabaseConfig {
    /// Postgres connection URL for the pool.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var       | Default     |
    /// |---------------|-------------|
    /// | `HOST`        | `0.0.0.0`   |
    /// | `PORT`        | `3000`      |
    /// | `DB_HOST`     | `localhost` |
    /// | `DB_PORT`     | `5432`      |
    /// | `DB_USER`     | required    |
    /// | `DB_PASSWORD` | required    |
    /// | `DB_NAME`     | required    |
    /// | `DB_POOL_MAX` | `10`        |
    pub fn from_env() -> Result<Self, StartupError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parsed_var("PORT", "3000")?;

        let database = DatabaseConfig {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port: parsed_var("DB_PORT", "5432")?,
            user: required_var("DB_USER")?,
            password: required_var("DB_PASSWORD")?,
            name: required_var("DB_NAME")?,
            pool_max: parsed_var("DB_POOL_MAX", "10")?,
        };

        Ok(Self {
            host,
            port,
            database,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, StartupError> {
    std::env::var(name).map_err(|_| StartupError::Config(format!("{name} must be set")))
}

fn parsed_var<T: FromStr>(name: &'static str, default: &str) -> Result<T, StartupError>
where
    T::Err: Display,
{
    std::env::var(name)
        .unwrap_or_else(|_| default.into())
        .parse()
        .map_err(|e| StartupError::Config(format!("{name} is invalid: {e}")))
}
