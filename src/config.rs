// config.rs - Server configuration from the environment
//
// `.env` is loaded first (if present), then plain environment variables.
// Without DATABASE_URL the server runs on the bundled sample catalog.

use std::env;
use std::str::FromStr;

use crate::fixtures::tables::products::DEFAULT_SCHEMA;
use crate::shop::error::CatalogError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub database_schema: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub seed_database: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_schema: DEFAULT_SCHEMA.to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            max_connections: 5,
            default_page_size: 12,
            max_page_size: 100,
            seed_database: true,
        }
    }
}

impl AppConfig {
    /// Load `.env` and read the process environment
    pub fn from_env() -> Result<Self, CatalogError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let config = Self {
            database_url: read("DATABASE_URL"),
            database_schema: read("DATABASE_SCHEMA").unwrap_or(defaults.database_schema),
            bind_addr: read("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_connections: parse_or("DB_MAX_CONNECTIONS", read("DB_MAX_CONNECTIONS"), defaults.max_connections)?,
            default_page_size: parse_or("DEFAULT_PAGE_SIZE", read("DEFAULT_PAGE_SIZE"), defaults.default_page_size)?,
            max_page_size: parse_or("MAX_PAGE_SIZE", read("MAX_PAGE_SIZE"), defaults.max_page_size)?,
            seed_database: parse_or("SEED_DATABASE", read("SEED_DATABASE"), defaults.seed_database)?,
        };

        if !is_schema_identifier(&config.database_schema) {
            return Err(CatalogError::Config(format!(
                "DATABASE_SCHEMA must be a plain identifier (letter or '_' first), got '{}'",
                config.database_schema
            )));
        }
        if config.max_page_size == 0 {
            return Err(CatalogError::Config("MAX_PAGE_SIZE must be positive".to_string()));
        }

        Ok(config)
    }
}

// Spliced into SQL unquoted, so it must be a bare Postgres identifier
fn is_schema_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, CatalogError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| CatalogError::Config(format!("{} '{}': {}", key, raw, e))),
    }
}
