//! Application configuration read from the environment
//!
//! Variables (a `.env` file in the working directory is honoured):
//!
//! | variable | default |
//! |---|---|
//! | `NEO4J_URI` | `bolt://localhost:7687` |
//! | `NEO4J_USER` | `neo4j` |
//! | `NEO4J_PASSWORD` | `password` |
//! | `NEO4J_DATABASE` | `neo4j` |
//! | `QUOTEBOOK_CACHE_TTL_SECS` | `3600` |
//! | `QUOTEBOOK_CACHE_MAX_ENTRIES` | `10000` |

use crate::cache::CacheConfig;
use crate::error::{QuoteError, Result};
use std::time::Duration;
use tracing::debug;

/// Neo4j connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
            database: "neo4j".to_string(),
        }
    }
}

/// Full configuration for a quotebook process
#[derive(Debug, Clone, Default)]
pub struct QuotebookConfig {
    pub store: StoreConfig,
    pub cache: CacheConfig,
}

impl QuotebookConfig {
    /// Load configuration from the process environment (and `.env`)
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_defaults = StoreConfig::default();
        let store = StoreConfig {
            uri: lookup("NEO4J_URI").unwrap_or(store_defaults.uri),
            user: lookup("NEO4J_USER").unwrap_or(store_defaults.user),
            password: lookup("NEO4J_PASSWORD").unwrap_or(store_defaults.password),
            database: lookup("NEO4J_DATABASE").unwrap_or(store_defaults.database),
        };

        let mut cache = CacheConfig::builder();
        if let Some(secs) = parse_var::<u64, _>(&lookup, "QUOTEBOOK_CACHE_TTL_SECS")? {
            cache = cache.default_ttl(Duration::from_secs(secs));
        }
        if let Some(max) = parse_var::<usize, _>(&lookup, "QUOTEBOOK_CACHE_MAX_ENTRIES")? {
            cache = cache.max_entries(max);
        }
        let cache = cache.build();
        cache.validate()?;

        Ok(Self { store, cache })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| QuoteError::ConfigError(format!("{} ({:?}): {}", key, raw, e))),
    }
}
