//! Cache entry management with TTL support

use crate::cache::types::{CacheKey, CacheValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A cache entry with TTL and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cache key
    pub key: CacheKey,

    /// The cached value
    pub value: CacheValue,

    /// Entry metadata
    pub metadata: CacheMetadata,
}

impl CacheEntry {
    /// Create a new cache entry expiring after `ttl`
    pub fn new(key: CacheKey, value: CacheValue, ttl: Duration) -> Self {
        let now = Utc::now();
        let expires_at =
            now + chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::seconds(3600));

        let mut entry = Self {
            key,
            value,
            metadata: CacheMetadata {
                created_at: now,
                accessed_at: now,
                expires_at,
                access_count: 0,
                size_bytes: 0,
            },
        };
        entry.metadata.size_bytes = entry.calculate_size();
        entry
    }

    /// Check if the entry has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.metadata.expires_at
    }

    /// Get time until expiration
    pub fn time_until_expiration(&self) -> Option<Duration> {
        let now = Utc::now();
        if now > self.metadata.expires_at {
            None
        } else {
            (self.metadata.expires_at - now).to_std().ok()
        }
    }

    /// Mark the entry as accessed (updates access time and count)
    pub fn mark_accessed(&mut self) {
        self.metadata.accessed_at = Utc::now();
        self.metadata.access_count += 1;
    }

    /// Approximate size: key + value + metadata overhead
    pub fn calculate_size(&self) -> usize {
        self.key.len() + self.value.len() + std::mem::size_of::<CacheMetadata>()
    }
}

/// Metadata associated with a cache entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// Last access time
    pub accessed_at: DateTime<Utc>,

    /// When the entry expires
    pub expires_at: DateTime<Utc>,

    /// Number of times this entry has been read
    pub access_count: u64,

    /// Size of the entry in bytes
    pub size_bytes: usize,
}
