//! Type definitions for quote graph nodes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author node; `fullname` is the display name lookups match against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Unique identifier for the author
    pub id: String,
    /// Display name, e.g. "Albert Einstein"
    pub fullname: String,
    /// Birth date as given by the source, e.g. "March 14, 1879"
    #[serde(default)]
    pub born_date: String,
    /// Birth place as given by the source, e.g. "in Ulm, Germany"
    #[serde(default)]
    pub born_location: String,
    /// Free-form biography
    #[serde(default)]
    pub description: String,
    /// Timestamp when the author was stored
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with a fresh id
    pub fn new(fullname: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fullname: fullname.into(),
            born_date: String::new(),
            born_location: String::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach biography details
    pub fn with_details(
        mut self,
        born_date: impl Into<String>,
        born_location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.born_date = born_date.into();
        self.born_location = born_location.into();
        self.description = description.into();
        self
    }

    /// Case-insensitive prefix match on the display name
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.fullname
            .to_lowercase()
            .starts_with(&prefix.to_lowercase())
    }
}

/// Tag node; names are stored as given
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Quote node, written by exactly one author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier for the quote
    pub id: String,
    /// Id of the author node this quote belongs to
    pub author_id: String,
    /// Quote text
    pub quote: String,
    /// Tags attached to the quote
    pub tags: Vec<Tag>,
}

impl Quote {
    /// Create a new quote with a fresh id
    pub fn new(author_id: impl Into<String>, quote: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.into(),
            quote: quote.into(),
            tags,
        }
    }

    /// True if any of the quote's tags is in `tags` (exact, case-sensitive)
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|t| tags.contains(&t.name))
    }
}
