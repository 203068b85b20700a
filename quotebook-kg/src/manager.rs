//! Cache-aside quote queries
//!
//! [`DataManager`] checks the cache, falls back to the data provider on a
//! miss and writes non-empty answers back. Negative answers ("not found",
//! "no results") are rebuilt on every call so newly stored data shows up
//! without any cache invalidation.

use crate::cache::{Cache, Namespace};
use crate::error::Result;
use crate::provider::DataProvider;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reply used when a query matches no quotes
pub const NO_RESULTS: &str = "No results found";

/// Reply used when no author matches a name
pub fn author_not_found(name: &str) -> String {
    format!("Author with name '{}' not found", title_case(name))
}

/// Upper-case the first letter of every run of letters, lower-case the rest
///
/// `"o'neil de la cruz"` becomes `"O'Neil De La Cruz"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Orchestrates cache-aside reads over one cache and one provider
#[derive(Clone)]
pub struct DataManager {
    cache: Arc<dyn Cache>,
    provider: Arc<dyn DataProvider>,
}

impl DataManager {
    pub fn new(cache: Arc<dyn Cache>, provider: Arc<dyn DataProvider>) -> Self {
        Self { cache, provider }
    }

    /// Quotes by the first author whose name starts with `name`
    ///
    /// # Returns
    /// * the cached or freshly fetched quote list
    /// * `["Author with name '<Name>' not found"]` if no author matches
    /// * `["No results found"]` if the author has no quotes
    /// * `Err(QuoteError)` only when the provider itself fails
    pub async fn query_by_author(&self, name: &str) -> Result<Vec<String>> {
        let key = self.cache.build_key(Namespace::Author, name);
        if let Some(cached) = self.cached(&key).await {
            return Ok(cached);
        }

        let Some(author) = self.provider.find_author_by_name(name).await? else {
            debug!("No author matches {:?}", name);
            return Ok(vec![author_not_found(name)]);
        };

        let quotes = self.provider.find_quotes_by_author(&author).await?;
        Ok(self.populate(&key, quotes).await)
    }

    /// Quotes tagged with any of `tags`
    ///
    /// The key keeps the tags in the order given, so `life,love` and
    /// `love,life` are cached separately.
    pub async fn query_by_tags(&self, tags: &[String]) -> Result<Vec<String>> {
        let key = self.cache.build_key(Namespace::Tags, &tags.join(","));
        if let Some(cached) = self.cached(&key).await {
            return Ok(cached);
        }

        let quotes = self.provider.find_quotes_by_tags(tags).await?;
        Ok(self.populate(&key, quotes).await)
    }

    /// An empty list from the backend is treated as a miss
    async fn cached(&self, key: &str) -> Option<Vec<String>> {
        let quotes = self.cache.get(key).await.filter(|q| !q.is_empty())?;
        debug!("Serving {} from cache", key);
        Some(quotes)
    }

    async fn populate(&self, key: &str, quotes: Vec<String>) -> Vec<String> {
        if quotes.is_empty() {
            return vec![NO_RESULTS.to_string()];
        }

        if let Err(e) = self.cache.set(key, &quotes).await {
            warn!("Failed to cache {}: {}", key, e);
        }
        quotes
    }
}
