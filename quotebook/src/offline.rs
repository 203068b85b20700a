//! Serving from seed files instead of Neo4j

use anyhow::{bail, Context, Result};
use quotebook_kg::{InMemoryDataProvider, SeedData};
use std::path::Path;
use tracing::info;

/// Load `authors.json` and `quotes.json` from `dir` into an in-memory provider
pub async fn load_provider(dir: &Path) -> Result<InMemoryDataProvider> {
    let seed = SeedData::from_dir(dir)
        .with_context(|| format!("Failed to load seed data from {:?}", dir))?;
    let provider = InMemoryDataProvider::from_seed(&seed)?;
    info!(
        "Serving {} authors and {} quotes from {:?}",
        provider.author_count().await,
        provider.quote_count().await,
        dir
    );
    Ok(provider)
}

/// Fail when `command` talks to Neo4j directly but `--offline` was given
pub fn require_online(offline: Option<&Path>, command: &str) -> Result<()> {
    if offline.is_some() {
        bail!("{} talks to Neo4j and cannot run with --offline", command);
    }
    Ok(())
}
