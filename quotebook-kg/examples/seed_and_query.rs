//! Seed a Neo4j database from JSON files and run a few lookups
//!
//! Usage:
//!   cargo run --example seed_and_query -- ./data
//!
//! The directory must contain `authors.json` and `quotes.json`. Connection
//! details come from the `NEO4J_*` environment variables.

use quotebook_kg::{
    seed_graph, CacheConfig, CommandManager, DataManager, MemoryCache, Neo4jClient,
    Neo4jDataProvider, QuotebookConfig, SeedData,
};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./data"));

    let config = QuotebookConfig::from_env()?;
    let client = Arc::new(Neo4jClient::from_config(&config.store).await?);

    let seed = SeedData::from_dir(&dir)?;
    let summary = seed_graph(client.graph(), &seed, true).await?;
    println!("Seeded {} authors, {} quotes", summary.authors, summary.quotes);

    let manager = CommandManager::new(DataManager::new(
        Arc::new(MemoryCache::new(CacheConfig::default())),
        Arc::new(Neo4jDataProvider::new(client)),
    ));

    for line in ["name:albert", "tag:life", "tags:love,humor", "name:nobody"] {
        println!(">>> {}", line);
        println!("{}", manager.handle_command(line).await?);
    }

    Ok(())
}
