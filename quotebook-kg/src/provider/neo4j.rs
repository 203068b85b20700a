//! Neo4j-backed data provider

use crate::connection::Neo4jClient;
use crate::error::Result;
use crate::provider::DataProvider;
use crate::schema::{self, Author};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Answers provider queries with the Cypher operations in [`crate::schema`]
pub struct Neo4jDataProvider {
    client: Arc<Neo4jClient>,
}

impl Neo4jDataProvider {
    pub fn new(client: Arc<Neo4jClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataProvider for Neo4jDataProvider {
    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>> {
        debug!("Looking up author by prefix: {:?}", name);
        schema::find_author_by_name(self.client.graph(), name).await
    }

    async fn find_quotes_by_author(&self, author: &Author) -> Result<Vec<String>> {
        debug!("Fetching quotes for author {}", author.id);
        schema::get_quotes_by_author(self.client.graph(), &author.id).await
    }

    async fn find_quotes_by_tags(&self, tags: &[String]) -> Result<Vec<String>> {
        debug!("Fetching quotes for tags {:?}", tags);
        schema::get_quotes_by_tags(self.client.graph(), tags).await
    }
}
