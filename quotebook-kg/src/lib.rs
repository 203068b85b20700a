//! # Quotebook Knowledge Graph (quotebook-kg)
//!
//! Quote lookups by author name or by tag, served from a Neo4j graph through
//! a cache-aside layer and driven by one-line text commands.
//!
//! ## Features
//!
//! - Cache-aside reads: cache hit, provider on miss, write-back of non-empty answers
//! - Negative answers ("not found", "no results") are never cached
//! - Pluggable [`Cache`] and [`DataProvider`] traits, injected at construction
//! - Neo4j provider plus an in-memory provider for tests and offline use
//! - In-memory TTL/LRU cache backend
//! - Seed loader for `authors.json` / `quotes.json`
//!
//! ## Commands
//!
//! ```no_run
//! use quotebook_kg::{
//!     CacheConfig, CommandManager, DataManager, MemoryCache, Neo4jClient, Neo4jDataProvider,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Neo4jClient::new(
//!         "bolt://localhost:7687",
//!         "neo4j",
//!         "password",
//!         "neo4j"
//!     ).await?;
//!
//!     let manager = CommandManager::new(DataManager::new(
//!         Arc::new(MemoryCache::new(CacheConfig::default())),
//!         Arc::new(Neo4jDataProvider::new(Arc::new(client))),
//!     ));
//!
//!     println!("{}", manager.handle_command("name:steve martin").await?);
//!     println!("{}", manager.handle_command("tags:life,love").await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Offline
//!
//! ```no_run
//! use quotebook_kg::{
//!     CacheConfig, DataManager, InMemoryDataProvider, MemoryCache, SeedData,
//! };
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let seed = SeedData::from_dir(Path::new("./data"))?;
//!     let data = DataManager::new(
//!         Arc::new(MemoryCache::new(CacheConfig::default())),
//!         Arc::new(InMemoryDataProvider::from_seed(&seed)?),
//!     );
//!
//!     for quote in data.query_by_tags(&["life".to_string()]).await? {
//!         println!("{}", quote);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod command;
pub mod config;
pub mod connection;
pub mod error;
pub mod manager;
pub mod provider;
pub mod schema;
pub mod seed;

// Re-export main types for convenience
pub use cache::{build_key, Cache, CacheConfig, CacheConfigBuilder, CacheStats, MemoryCache, Namespace};
pub use command::{Command, CommandError, CommandManager, Reply, EXIT_COMMANDS, HELP};
pub use config::{QuotebookConfig, StoreConfig};
pub use connection::{HealthCheckConfig, HealthCheckResult, HealthStatus, Neo4jClient};
pub use error::{QuoteError, Result};
pub use manager::{DataManager, NO_RESULTS};
pub use provider::{DataProvider, InMemoryDataProvider, Neo4jDataProvider};
pub use seed::{seed_graph, SeedData, SeedSummary};
