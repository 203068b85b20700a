//! Core type definitions for the cache system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cache key type - `"<namespace>:<lower-cased argument>"`
pub type CacheKey = String;

/// Cache value type - a serialized quote list
pub type CacheValue = String;

/// Key space of a cached query
///
/// Both query shapes share one cache store; the namespace keeps
/// `author:love` and `tags:love` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// Quotes looked up by author name
    Author,

    /// Quotes looked up by tag list
    Tags,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Author => "author",
            Namespace::Tags => "tags",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a cache key for a query
///
/// Pure and deterministic: the same namespace and argument always produce
/// the same key, regardless of the argument's case.
pub fn build_key(namespace: Namespace, argument: &str) -> CacheKey {
    format!("{}:{}", namespace, argument.to_lowercase())
}

/// Statistics and metrics for cache performance monitoring
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheStats {
    /// Total number of cache hits
    pub hits: u64,

    /// Total number of cache misses
    pub misses: u64,

    /// Number of entries currently in cache
    pub entries: usize,

    /// Total size of cached data in bytes
    pub size_bytes: usize,

    /// Number of evictions due to size limits
    pub evictions_size: u64,

    /// Number of evictions due to TTL expiration
    pub evictions_ttl: u64,

    /// Number of manual removals
    pub invalidations: u64,
}

impl CacheStats {
    /// Calculate cache hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Calculate total evictions
    pub fn total_evictions(&self) -> u64 {
        self.evictions_size + self.evictions_ttl
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CacheStats {{ hits: {}, misses: {}, hit_rate: {:.2}%, entries: {}, size: {} bytes, evictions: {} }}",
            self.hits,
            self.misses,
            self.hit_rate(),
            self.entries,
            self.size_bytes,
            self.total_evictions()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_key_lowercases_argument() {
        assert_eq!(build_key(Namespace::Author, "Steve Martin"), "author:steve martin");
        assert_eq!(build_key(Namespace::Tags, "Life,LOVE"), "tags:life,love");
    }

    #[test]
    fn test_build_key_is_deterministic() {
        let a = build_key(Namespace::Author, "Albert Einstein");
        let b = build_key(Namespace::Author, "albert einstein");
        assert_eq!(a, b);
        assert_ne!(a, build_key(Namespace::Tags, "albert einstein"));
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::Author.to_string(), "author");
        assert_eq!(Namespace::Tags.to_string(), "tags");
    }

    #[test]
    fn test_cache_stats_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            ..Default::default()
        };
        assert_eq!(stats.hit_rate(), 80.0);
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_cache_stats_display() {
        let stats = CacheStats {
            hits: 100,
            misses: 50,
            entries: 75,
            size_bytes: 1024,
            evictions_size: 10,
            evictions_ttl: 5,
            invalidations: 3,
        };

        let display = format!("{}", stats);
        assert!(display.contains("hits: 100"));
        assert!(display.contains("evictions: 15"));
    }
}
