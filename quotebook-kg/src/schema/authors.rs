//! Author node operations

use crate::error::{QuoteError, Result};
use crate::schema::types::Author;
use chrono::{DateTime, Utc};
use neo4rs::{query, Graph, Row};

/// Store an Author node, reusing an existing node with the same fullname
///
/// # Arguments
/// * `graph` - Neo4j graph connection
/// * `author` - Author to store
///
/// # Returns
/// * `Ok(String)` - ID of the stored author (the existing one on a repeat)
/// * `Err(QuoteError)` on failure
///
/// # Example
/// ```no_run
/// use quotebook_kg::{Neo4jClient, schema::{Author, create_author}};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = Neo4jClient::new(
///         "bolt://localhost:7687",
///         "neo4j",
///         "password",
///         "neo4j"
///     ).await?;
///
///     let author = Author::new("Jane Austen");
///     let id = create_author(client.graph(), &author).await?;
///     println!("Stored author {}", id);
///     Ok(())
/// }
/// ```
pub async fn create_author(graph: &Graph, author: &Author) -> Result<String> {
    let cypher = query(
        "MERGE (a:Author {fullname: $fullname})
         ON CREATE SET a.id = $id,
                       a.born_date = $born_date,
                       a.born_location = $born_location,
                       a.description = $description,
                       a.created_at = $created_at
         RETURN a.id AS id",
    )
    .param("id", author.id.clone())
    .param("fullname", author.fullname.clone())
    .param("born_date", author.born_date.clone())
    .param("born_location", author.born_location.clone())
    .param("description", author.description.clone())
    .param("created_at", author.created_at.to_rfc3339());

    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to create author: {}", e)))?;

    let row = result
        .next()
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to read result: {}", e)))?
        .ok_or_else(|| QuoteError::QueryError("No result returned".to_string()))?;

    row.get("id")
        .map_err(|e| QuoteError::QueryError(format!("Failed to extract id: {}", e)))
}

/// Find the first author whose fullname starts with `name`, ignoring case
///
/// Several authors may share a prefix ("Ma" matches both "Mark Twain" and
/// "Marilyn Monroe"); the alphabetically first fullname wins.
///
/// # Returns
/// * `Ok(Some(Author))` if an author matches
/// * `Ok(None)` if none does
/// * `Err(QuoteError)` on failure
pub async fn find_author_by_name(graph: &Graph, name: &str) -> Result<Option<Author>> {
    let cypher = query(
        "MATCH (a:Author)
         WHERE toLower(a.fullname) STARTS WITH toLower($name)
         RETURN a.id AS id, a.fullname AS fullname, a.born_date AS born_date,
                a.born_location AS born_location, a.description AS description,
                a.created_at AS created_at
         ORDER BY a.fullname
         LIMIT 1",
    )
    .param("name", name.to_string());

    let mut result = graph
        .execute(cypher)
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to find author: {}", e)))?;

    match result
        .next()
        .await
        .map_err(|e| QuoteError::QueryError(format!("Failed to read result: {}", e)))?
    {
        Some(row) => author_from_row(&row).map(Some),
        None => Ok(None),
    }
}

fn author_from_row(row: &Row) -> Result<Author> {
    let id: String = row
        .get("id")
        .map_err(|e| QuoteError::QueryError(format!("Failed to extract id: {}", e)))?;
    let fullname: String = row
        .get("fullname")
        .map_err(|e| QuoteError::QueryError(format!("Failed to extract fullname: {}", e)))?;
    let created_at: String = row.get("created_at").unwrap_or_default();

    Ok(Author {
        id,
        fullname,
        born_date: row.get("born_date").unwrap_or_default(),
        born_location: row.get("born_location").unwrap_or_default(),
        description: row.get("description").unwrap_or_default(),
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}
