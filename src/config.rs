//! Runtime configuration for the `PostgreSQL` store.
//!
//! Settings are read from environment variables:
//!
//! - `DATABASE_URL` (required): connection URL for the kanban database
//! - `KANBAN_DB_POOL_SIZE` (optional): maximum pooled connections, default 10

use thiserror::Error;

/// Environment variable holding the database connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable holding the connection pool size.
pub const POOL_SIZE_VAR: &str = "KANBAN_DB_POOL_SIZE";

/// Pool size used when [`POOL_SIZE_VAR`] is unset.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors returned while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("required environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// The pool size is not a positive integer.
    #[error("KANBAN_DB_POOL_SIZE must be a positive integer, got '{0}'")]
    InvalidPoolSize(String),
}

/// Connection settings for the `PostgreSQL` store.
///
/// # Example
///
/// ```
/// use corkboard::config::DatabaseConfig;
///
/// let config = DatabaseConfig::from_lookup(|key| match key {
///     "DATABASE_URL" => Some("postgres://localhost/kanban".to_owned()),
///     _ => None,
/// })
/// .expect("valid configuration");
///
/// assert_eq!(config.max_connections(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    url: String,
    max_connections: u32,
}

impl DatabaseConfig {
    /// Creates configuration from explicit values.
    #[must_use]
    pub fn new(url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections: max_connections.max(1),
        }
    }

    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or the pool
    /// size cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or the pool
    /// size cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(DATABASE_URL_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVariable(DATABASE_URL_VAR))?;

        let max_connections = match lookup(POOL_SIZE_VAR) {
            None => DEFAULT_POOL_SIZE,
            Some(raw) => parse_pool_size(&raw)?,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }

    /// Returns the connection URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPoolSize(raw.to_owned())),
    }
}
