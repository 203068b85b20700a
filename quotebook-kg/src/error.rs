//! Error types for quote lookups
//!
//! This module defines the error type shared by the store, cache and seed
//! layers. Command-level input errors live in [`crate::command::CommandError`]
//! and never surface as a `QuoteError`.

use thiserror::Error;

/// Main error type for quotebook operations
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Connection error - network or connection pool issues
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Query execution error
    #[error("Query error: {0}")]
    QueryError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Seed data could not be read or is inconsistent
    #[error("Seed error: {0}")]
    SeedError(String),

    /// Cache backend refused an operation
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Neo4rs driver error (wrapper)
    #[error("Neo4rs driver error: {0}")]
    DriverError(#[from] neo4rs::Error),
}

/// Result type alias for quotebook operations
pub type Result<T> = std::result::Result<T, QuoteError>;

impl From<serde_json::Error> for QuoteError {
    fn from(e: serde_json::Error) -> Self {
        QuoteError::SerializationError(e.to_string())
    }
}
