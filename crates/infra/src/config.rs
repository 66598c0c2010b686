use std::{fmt::Display, str::FromStr};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Whether pending migrations are applied when the context is created
    pub run_migrations: bool,
    pub database: DatabaseConfig,
}

/// Connection settings for the companies database.
///
/// `DATABASE_URL` takes precedence over the individual `DB_*` variables.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Upper bound of pooled connections
    pub max_connections: u32,
    /// How long a request waits for a pooled connection before the
    /// database is considered unavailable
    pub acquire_timeout_secs: u64,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn string_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

impl DatabaseConfig {
    pub fn new() -> Self {
        Self {
            url: std::env::var("DATABASE_URL").ok(),
            host: string_env("DB_HOST", "localhost"),
            port: parse_env("DB_PORT", 5432),
            user: string_env("DB_USER", "postgres"),
            password: string_env("DB_PASSWORD", ""),
            name: string_env("DB_NAME", "company_registry"),
            max_connections: parse_env("DB_MAX_CONNECTIONS", 5),
            acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", 5),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            port: parse_env("PORT", 5000),
            run_migrations: parse_env("RUN_MIGRATIONS", true),
            database: DatabaseConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
