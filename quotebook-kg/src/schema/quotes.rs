//! Quote and Tag node operations
//!
//! Quotes hang off their author and their tags:
//! `(:Quote)-[:WRITTEN_BY]->(:Author)` and `(:Quote)-[:TAGGED]->(:Tag)`.

use crate::error::{QuoteError, Result};
use crate::schema::types::Quote;
use neo4rs::{query, Graph, Query};

/// Store a Quote node, linking it to its author and merging its tags
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(QuoteError::QueryError)` if the author does not exist or the query fails
pub async fn create_quote(graph: &Graph, quote: &Quote) -> Result<()> {
    let tags: Vec<String> = quote.tags.iter().map(|t| t.name.clone()).collect();

    let cypher = query(
        "MATCH (a:Author {id: $author_id})
         CREATE (q:Quote {id: $id, quote: $quote, created_at: $created_at})-[:WRITTEN_BY]->(a)
         FOREACH (tag IN $tags |
             MERGE (t:Tag {name: tag})
             MERGE (q)-[:TAGGED]->(t))
         RETURN q.id AS id",
    )
    .param("author_id", quote.author_id.clone())
    .param("id", quote.id.clone())
    .param("quote", quote.quote.clone())
    .param("created_at", chrono::Utc::now().to_rfc3339())
    .param("tags", tags);

    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to create quote: {}", e)))?;

    let created = result
        .next()
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to read result: {}", e)))?
        .is_some();

    if created {
        Ok(())
    } else {
        Err(QuoteError::QueryError(format!(
            "Author {} not found for quote {}",
            quote.author_id, quote.id
        )))
    }
}

/// Get the text of every quote written by the author with `author_id`
///
/// Quotes come back in creation order. An unknown id yields an empty list.
pub async fn get_quotes_by_author(graph: &Graph, author_id: &str) -> Result<Vec<String>> {
    let cypher = query(
        "MATCH (q:Quote)-[:WRITTEN_BY]->(:Author {id: $author_id})
         RETURN q.quote AS quote
         ORDER BY q.created_at",
    )
    .param("author_id", author_id.to_string());

    collect_quotes(graph, cypher).await
}

/// Get the text of every quote carrying at least one of `tags`
///
/// Tag names match exactly. A quote tagged with several of the requested
/// tags appears once.
pub async fn get_quotes_by_tags(graph: &Graph, tags: &[String]) -> Result<Vec<String>> {
    let cypher = query(
        "MATCH (q:Quote)-[:TAGGED]->(t:Tag)
         WHERE t.name IN $tags
         WITH DISTINCT q
         RETURN q.quote AS quote
         ORDER BY q.created_at",
    )
    .param("tags", tags.to_vec());

    collect_quotes(graph, cypher).await
}

/// Remove every Author, Quote and Tag node
pub async fn clear_quotes(graph: &Graph) -> Result<()> {
    graph
        .run(query(
            "MATCH (n) WHERE n:Author OR n:Quote OR n:Tag DETACH DELETE n",
        ))
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to clear quotes: {}", e)))
}

async fn collect_quotes(graph: &Graph, cypher: Query) -> Result<Vec<String>> {
    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to query quotes: {}", e)))?;

    let mut quotes = Vec::new();

    while let Some(row) = result
        .next()
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to read row: {}", e)))?
    {
        let quote: String = row
            .get("quote")
            .map_err(|e| QuoteError::QueryError(format!("Failed to extract quote: {}", e)))?;
        quotes.push(quote);
    }

    Ok(quotes)
}
