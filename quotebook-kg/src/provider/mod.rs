//! Quote data providers
//!
//! [`DataProvider`] is the source of truth behind the cache. Two
//! implementations ship with the crate:
//!
//! - [`Neo4jDataProvider`] runs Cypher against a live graph
//! - [`InMemoryDataProvider`] keeps everything in process, for tests and
//!   `--offline` runs

pub mod memory;
pub mod neo4j;

pub use memory::InMemoryDataProvider;
pub use neo4j::Neo4jDataProvider;

use crate::error::Result;
use crate::schema::Author;
use async_trait::async_trait;

/// Read access to authors and their quotes
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// First author whose fullname starts with `name`, ignoring case
    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>>;

    /// Text of every quote by `author`; empty if there are none
    async fn find_quotes_by_author(&self, author: &Author) -> Result<Vec<String>>;

    /// Text of every quote tagged with any of `tags`; empty if there are none
    async fn find_quotes_by_tags(&self, tags: &[String]) -> Result<Vec<String>>;
}
