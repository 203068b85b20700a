//! In-process data provider

use crate::error::{QuoteError, Result};
use crate::provider::DataProvider;
use crate::schema::{Author, Quote};
use crate::seed::SeedData;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Authors and quotes held in memory
///
/// Lookups keep insertion order: when several authors share a prefix the
/// one added first wins, and quotes come back in the order they were added.
#[derive(Debug, Default)]
pub struct InMemoryDataProvider {
    authors: RwLock<Vec<Author>>,
    quotes: RwLock<Vec<Quote>>,
}

impl InMemoryDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from parsed seed files
    pub fn from_seed(seed: &SeedData) -> Result<Self> {
        let (authors, quotes) = seed.to_graph()?;
        Ok(Self {
            authors: RwLock::new(authors),
            quotes: RwLock::new(quotes),
        })
    }

    /// Add an author, returning its id
    pub async fn add_author(&self, author: Author) -> String {
        let id = author.id.clone();
        self.authors.write().await.push(author);
        id
    }

    /// Add a quote; its author must already exist
    pub async fn add_quote(&self, quote: Quote) -> Result<()> {
        let known = self
            .authors
            .read()
            .await
            .iter()
            .any(|a| a.id == quote.author_id);
        if !known {
            return Err(QuoteError::QueryError(format!(
                "Author {} not found for quote {}",
                quote.author_id, quote.id
            )));
        }
        self.quotes.write().await.push(quote);
        Ok(())
    }

    pub async fn author_count(&self) -> usize {
        self.authors.read().await.len()
    }

    pub async fn quote_count(&self) -> usize {
        self.quotes.read().await.len()
    }
}

#[async_trait]
impl DataProvider for InMemoryDataProvider {
    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>> {
        let authors = self.authors.read().await;
        Ok(authors.iter().find(|a| a.matches_prefix(name)).cloned())
    }

    async fn find_quotes_by_author(&self, author: &Author) -> Result<Vec<String>> {
        let quotes = self.quotes.read().await;
        Ok(quotes
            .iter()
            .filter(|q| q.author_id == author.id)
            .map(|q| q.quote.clone())
            .collect())
    }

    async fn find_quotes_by_tags(&self, tags: &[String]) -> Result<Vec<String>> {
        let quotes = self.quotes.read().await;
        Ok(quotes
            .iter()
            .filter(|q| q.has_any_tag(tags))
            .map(|q| q.quote.clone())
            .collect())
    }
}
