//! Quote graph schema module
//!
//! This module defines the Author, Quote and Tag nodes and the Cypher
//! operations the Neo4j data provider and the seed loader are built on.

pub mod authors;
pub mod quotes;
pub mod types;

pub use authors::{create_author, find_author_by_name};
pub use quotes::{clear_quotes, create_quote, get_quotes_by_author, get_quotes_by_tags};
pub use types::{Author, Quote, Tag};
