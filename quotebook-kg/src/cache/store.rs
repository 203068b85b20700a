//! In-memory cache backend with TTL expiry and LRU eviction

use crate::cache::{
    config::CacheConfig,
    entry::CacheEntry,
    types::{CacheKey, CacheStats, CacheValue},
    Cache,
};
use crate::error::{QuoteError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// In-memory cache with TTL support and LRU eviction
///
/// This implementation provides:
/// - Thread-safe async access via RwLock
/// - TTL-based expiration checked on read
/// - LRU eviction when entry or size limits are reached
/// - Hit/miss/eviction counters
///
/// Values are opaque strings; the [`Cache`] impl stores quote lists as JSON.
pub struct MemoryCache {
    /// Cache configuration
    pub(crate) config: CacheConfig,

    /// Internal storage
    store: Arc<RwLock<CacheStore>>,
}

/// Internal cache storage
struct CacheStore {
    /// Main storage: key -> entry
    entries: HashMap<CacheKey, CacheEntry>,

    /// LRU tracking: front is the next eviction candidate
    lru_queue: VecDeque<CacheKey>,

    /// Current cache statistics
    stats: CacheStats,

    /// Total size of cached data in bytes
    current_size_bytes: usize,
}

impl MemoryCache {
    /// Create a new cache with the given configuration
    pub fn new(config: CacheConfig) -> Self {
        info!("Initializing quote cache with config: {:?}", config);

        let store = CacheStore {
            entries: HashMap::new(),
            lru_queue: VecDeque::new(),
            stats: CacheStats::default(),
            current_size_bytes: 0,
        };

        Self {
            config,
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Insert a raw value, overwriting any previous value for `key`
    pub async fn insert(&self, key: CacheKey, value: CacheValue) -> Result<()> {
        let ttl = self.config.ttl_with_jitter();
        let entry = CacheEntry::new(key.clone(), value, ttl);
        let size = entry.metadata.size_bytes;

        let mut store = self.store.write().await;

        // An overwrite must not count its own stale copy against the limits
        self.remove_entry(&mut store, &key);
        self.evict_if_needed(&mut store, size)?;

        debug!("Inserting cache entry: {}", key);
        store.entries.insert(key.clone(), entry);
        store.lru_queue.push_back(key);
        store.current_size_bytes += size;

        self.update_stats(&mut store);

        Ok(())
    }

    /// Look up a raw value; expired entries are dropped and count as a miss
    pub async fn lookup(&self, key: &str) -> Option<CacheValue> {
        let mut store = self.store.write().await;

        let Some(expired) = store.entries.get(key).map(|entry| entry.is_expired()) else {
            debug!("Cache miss: {}", key);
            store.stats.misses += 1;
            return None;
        };

        if expired {
            debug!("Cache entry expired: {}", key);
            store.stats.misses += 1;
            store.stats.evictions_ttl += 1;
            self.remove_entry(&mut store, key);
            return None;
        }

        let value = store.entries.get_mut(key).map(|entry| {
            entry.mark_accessed();
            entry.value.clone()
        });
        store.stats.hits += 1;

        if self.config.enable_lru_eviction {
            store.lru_queue.retain(|k| k != key);
            store.lru_queue.push_back(key.to_string());
        }

        debug!("Cache hit: {}", key);
        value
    }

    /// Check if a key exists in the cache (without updating access time)
    pub async fn contains_key(&self, key: &str) -> bool {
        let store = self.store.read().await;
        store.entries.contains_key(key)
    }

    /// Remove a specific entry from the cache
    pub async fn remove(&self, key: &str) -> Option<CacheValue> {
        let mut store = self.store.write().await;

        let removed = self.remove_entry(&mut store, key);
        if removed.is_some() {
            store.stats.invalidations += 1;
            debug!("Removed cache entry: {}", key);
        }
        removed
    }

    /// Clear all entries from the cache
    pub async fn clear(&self) {
        let mut store = self.store.write().await;

        let count = store.entries.len();
        store.entries.clear();
        store.lru_queue.clear();
        store.current_size_bytes = 0;
        store.stats.entries = 0;
        store.stats.size_bytes = 0;
        store.stats.invalidations += count as u64;

        info!("Cleared {} entries from cache", count);
    }

    /// Remove all expired entries, returning how many were dropped
    pub async fn cleanup_expired(&self) -> usize {
        let mut store = self.store.write().await;

        let expired_keys: Vec<CacheKey> = store
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(&mut store, key);
        }

        if !expired_keys.is_empty() {
            store.stats.evictions_ttl += expired_keys.len() as u64;
            self.update_stats(&mut store);
            debug!("Cleaned up {} expired entries", expired_keys.len());
        }

        expired_keys.len()
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        store.stats.clone()
    }

    /// Get number of entries in cache
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.entries.len()
    }

    /// Check if cache is empty
    pub async fn is_empty(&self) -> bool {
        let store = self.store.read().await;
        store.entries.is_empty()
    }

    /// Internal: Remove an entry from the store
    fn remove_entry(&self, store: &mut CacheStore, key: &str) -> Option<CacheValue> {
        let entry = store.entries.remove(key)?;
        store.lru_queue.retain(|k| k != key);
        store.current_size_bytes = store
            .current_size_bytes
            .saturating_sub(entry.metadata.size_bytes);
        store.stats.entries = store.entries.len();
        Some(entry.value)
    }

    /// Internal: Evict entries if needed to make room for new entry
    fn evict_if_needed(&self, store: &mut CacheStore, needed_size: usize) -> Result<()> {
        if needed_size > self.config.max_size_bytes {
            warn!(
                "Entry of {} bytes exceeds cache size limit of {} bytes",
                needed_size, self.config.max_size_bytes
            );
            return Err(QuoteError::CacheError(
                "Cache size limit exceeded".to_string(),
            ));
        }

        while store.entries.len() >= self.config.max_entries {
            let Some(key) = store.lru_queue.pop_front() else {
                break;
            };
            debug!("Evicting entry due to max_entries limit: {}", key);
            self.remove_entry(store, &key);
            store.stats.evictions_size += 1;
        }

        while store.current_size_bytes + needed_size > self.config.max_size_bytes {
            let Some(key) = store.lru_queue.pop_front() else {
                break;
            };
            debug!("Evicting entry due to size limit: {}", key);
            self.remove_entry(store, &key);
            store.stats.evictions_size += 1;
        }

        Ok(())
    }

    /// Internal: Update cache statistics
    fn update_stats(&self, store: &mut CacheStore) {
        store.stats.entries = store.entries.len();
        if self.config.enable_metrics {
            store.stats.size_bytes = store.current_size_bytes;
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Vec<String>> {
        let raw = self.lookup(key).await?;
        match serde_json::from_str(&raw) {
            Ok(quotes) => Some(quotes),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                self.remove(key).await;
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &[String]) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.insert(key.to_string(), raw).await
    }
}

/// Background task for automatic cache cleanup
pub async fn start_auto_cleanup(cache: Arc<MemoryCache>) {
    let interval = cache.config.cleanup_interval;

    info!("Starting automatic cache cleanup task (interval: {:?})", interval);

    loop {
        tokio::time::sleep(interval).await;

        let removed = cache.cleanup_expired().await;
        if removed > 0 {
            debug!("Auto cleanup removed {} entries", removed);
        }
    }
}
