//! Seed data loading
//!
//! Reads the `authors.json` / `quotes.json` pair and turns it into graph
//! nodes, either for [`crate::InMemoryDataProvider`] or for Neo4j.
//!
//! ```json
//! [{"fullname": "Albert Einstein", "born_date": "March 14, 1879",
//!   "born_location": "in Ulm, Germany", "description": "..."}]
//! ```
//!
//! ```json
//! [{"tags": ["change", "deep-thoughts"], "author": "Albert Einstein",
//!   "quote": "“The world as we have created it is a process of our thinking.”"}]
//! ```

use crate::error::{QuoteError, Result};
use crate::schema::{self, Author, Quote, Tag};
use neo4rs::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// File name of the author list inside a seed directory
pub const AUTHORS_FILE: &str = "authors.json";
/// File name of the quote list inside a seed directory
pub const QUOTES_FILE: &str = "quotes.json";

/// One entry of `authors.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub fullname: String,
    #[serde(default)]
    pub born_date: String,
    #[serde(default)]
    pub born_location: String,
    #[serde(default)]
    pub description: String,
}

/// One entry of `quotes.json`; `author` refers to an author's fullname
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    pub quote: String,
}

/// Parsed contents of a seed file pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub authors: Vec<AuthorRecord>,
    pub quotes: Vec<QuoteRecord>,
}

/// Counts reported after seeding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub authors: usize,
    pub quotes: usize,
}

impl SeedData {
    /// Read an authors file and a quotes file
    pub fn load(authors_path: &Path, quotes_path: &Path) -> Result<Self> {
        Ok(Self {
            authors: read_json(authors_path)?,
            quotes: read_json(quotes_path)?,
        })
    }

    /// Read `authors.json` and `quotes.json` from `dir`
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::load(&dir.join(AUTHORS_FILE), &dir.join(QUOTES_FILE))
    }

    /// Resolve author references and build graph nodes
    ///
    /// Authors are deduplicated by fullname (first record wins). A quote
    /// naming an author that is not in the author list is an error.
    /// Tag names are lower-cased, since command input is lower-cased
    /// before it reaches a provider.
    pub fn to_graph(&self) -> Result<(Vec<Author>, Vec<Quote>)> {
        let mut authors: Vec<Author> = Vec::with_capacity(self.authors.len());
        let mut ids: HashMap<&str, String> = HashMap::new();

        for record in &self.authors {
            if ids.contains_key(record.fullname.as_str()) {
                continue;
            }
            let author = Author::new(record.fullname.clone()).with_details(
                record.born_date.clone(),
                record.born_location.clone(),
                record.description.clone(),
            );
            ids.insert(record.fullname.as_str(), author.id.clone());
            authors.push(author);
        }

        let quotes = self
            .quotes
            .iter()
            .map(|record| {
                let author_id = ids.get(record.author.as_str()).ok_or_else(|| {
                    QuoteError::SeedError(format!(
                        "quote references unknown author '{}'",
                        record.author
                    ))
                })?;
                let tags = record.tags.iter().map(|t| Tag::new(t.to_lowercase())).collect();
                Ok(Quote::new(author_id.clone(), record.quote.clone(), tags))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((authors, quotes))
    }
}

/// Write seed data into Neo4j
///
/// With `reset` every existing Author, Quote and Tag node is removed first.
/// Authors and tags are merged by name, so seeding twice without `reset`
/// duplicates quotes but not authors.
pub async fn seed_graph(graph: &Graph, seed: &SeedData, reset: bool) -> Result<SeedSummary> {
    let (authors, quotes) = seed.to_graph()?;

    if reset {
        info!("Clearing existing quote data");
        schema::clear_quotes(graph).await?;
    }

    // MERGE may hand back an existing id, so remap before writing quotes
    let mut stored_ids: HashMap<String, String> = HashMap::new();
    for author in &authors {
        let stored = schema::create_author(graph, author).await?;
        stored_ids.insert(author.id.clone(), stored);
    }

    for mut quote in quotes.iter().cloned() {
        if let Some(stored) = stored_ids.get(&quote.author_id) {
            quote.author_id = stored.clone();
        }
        schema::create_quote(graph, &quote).await?;
    }

    let summary = SeedSummary {
        authors: authors.len(),
        quotes: quotes.len(),
    };
    info!(
        "Seeded {} authors and {} quotes",
        summary.authors, summary.quotes
    );
    Ok(summary)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| QuoteError::SeedError(format!("Failed to read {:?}: {}", path, e)))?;
    serde_json::from_str(&content)
        .map_err(|e| QuoteError::SeedError(format!("Failed to parse {:?}: {}", path, e)))
}
