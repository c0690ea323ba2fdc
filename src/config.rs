use sqlx::postgres::PgConnectOptions;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Where expenses are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    /// Process-local storage, lost on restart
    Memory,
}

/// Returned when `EXPENSE_STORAGE` names no known backend
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown storage backend: {0} (expected postgres or memory)")]
pub struct UnknownStorageBackend(pub String);

impl FromStr for StorageBackend {
    type Err = UnknownStorageBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(UnknownStorageBackend(s.to_string())),
        }
    }
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the individual parts
    pub url: Option<String>,
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Builds connection options, honouring `url` when present
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse(),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name)),
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub storage: StorageBackend,
    pub server_addr: SocketAddr,
}

impl Config {
    /// Loads `.env` (if any) and reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL"),
            host: string_or(&lookup, "DB_HOST", "localhost"),
            user: string_or(&lookup, "DB_USER", "postgres"),
            password: string_or(&lookup, "DB_PASSWORD", "postgres"),
            name: string_or(&lookup, "DB_NAME", "expenses"),
            port: parse_or(&lookup, "DB_PORT", 5432)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
        };

        let storage = parse_or(&lookup, "EXPENSE_STORAGE", StorageBackend::Postgres)?;
        let host = parse_or(&lookup, "SERVER_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or(&lookup, "SERVER_PORT", 8000)?;

        Ok(Self {
            database,
            storage,
            server_addr: SocketAddr::new(host, port),
        })
    }
}

fn string_or(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| {
        tracing::warn!("{} not set, using default", key);
        default.to_string()
    })
}

fn parse_or<T: FromStr + std::fmt::Debug>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => {
            tracing::warn!("{} not set, using default {:?}", key, default);
            Ok(default)
        }
    }
}
