//! Configuration for the cache system

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the in-memory quote cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default time-to-live for cache entries
    pub default_ttl: Duration,

    /// Maximum number of entries in the cache
    pub max_entries: usize,

    /// Maximum total size of cached data in bytes
    pub max_size_bytes: usize,

    /// TTL jitter factor (0.0 - 1.0)
    /// Spreads expirations of entries written together
    pub ttl_jitter: f64,

    /// Enable automatic cleanup of expired entries
    pub enable_auto_cleanup: bool,

    /// Interval for automatic cleanup checks
    pub cleanup_interval: Duration,

    /// Enable LRU eviction policy
    /// When true, a hit moves the entry to the back of the eviction queue
    pub enable_lru_eviction: bool,

    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // 1 hour
            default_ttl: Duration::from_secs(3600),
            max_entries: 10_000,
            // 16 MB
            max_size_bytes: 16 * 1024 * 1024,
            ttl_jitter: 0.125,
            enable_auto_cleanup: true,
            // Cleanup every 5 minutes
            cleanup_interval: Duration::from_secs(300),
            enable_lru_eviction: true,
            enable_metrics: true,
        }
    }
}

impl CacheConfig {
    /// Create a new builder for cache configuration
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            return Err(QuoteError::ConfigError(
                "max_entries must be greater than 0".to_string(),
            ));
        }

        if self.max_size_bytes == 0 {
            return Err(QuoteError::ConfigError(
                "max_size_bytes must be greater than 0".to_string(),
            ));
        }

        if self.ttl_jitter < 0.0 || self.ttl_jitter > 1.0 {
            return Err(QuoteError::ConfigError(
                "ttl_jitter must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }

    /// Calculate actual TTL with jitter applied
    pub fn ttl_with_jitter(&self) -> Duration {
        if self.ttl_jitter == 0.0 {
            return self.default_ttl;
        }

        let base_secs = self.default_ttl.as_secs_f64();
        let jitter_range = base_secs * self.ttl_jitter;
        let jitter = (rand::random::<f64>() * 2.0 - 1.0) * jitter_range;
        let final_secs = (base_secs + jitter).max(1.0);

        Duration::from_secs_f64(final_secs)
    }
}

/// Builder for cache configuration
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    default_ttl: Option<Duration>,
    max_entries: Option<usize>,
    max_size_bytes: Option<usize>,
    ttl_jitter: Option<f64>,
    enable_auto_cleanup: Option<bool>,
    cleanup_interval: Option<Duration>,
    enable_lru_eviction: Option<bool>,
    enable_metrics: Option<bool>,
}

impl CacheConfigBuilder {
    /// Set default TTL for cache entries
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Set maximum number of cache entries
    pub fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// Set maximum cache size in bytes
    pub fn max_size_bytes(mut self, size: usize) -> Self {
        self.max_size_bytes = Some(size);
        self
    }

    /// Set TTL jitter factor (0.0 - 1.0)
    pub fn ttl_jitter(mut self, jitter: f64) -> Self {
        self.ttl_jitter = Some(jitter);
        self
    }

    /// Enable or disable automatic cleanup
    pub fn enable_auto_cleanup(mut self, enable: bool) -> Self {
        self.enable_auto_cleanup = Some(enable);
        self
    }

    /// Set cleanup interval
    pub fn cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = Some(interval);
        self
    }

    /// Enable or disable LRU eviction
    pub fn enable_lru_eviction(mut self, enable: bool) -> Self {
        self.enable_lru_eviction = Some(enable);
        self
    }

    /// Enable or disable metrics collection
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = Some(enable);
        self
    }

    /// Build the cache configuration
    pub fn build(self) -> CacheConfig {
        let defaults = CacheConfig::default();

        CacheConfig {
            default_ttl: self.default_ttl.unwrap_or(defaults.default_ttl),
            max_entries: self.max_entries.unwrap_or(defaults.max_entries),
            max_size_bytes: self.max_size_bytes.unwrap_or(defaults.max_size_bytes),
            ttl_jitter: self.ttl_jitter.unwrap_or(defaults.ttl_jitter),
            enable_auto_cleanup: self
                .enable_auto_cleanup
                .unwrap_or(defaults.enable_auto_cleanup),
            cleanup_interval: self.cleanup_interval.unwrap_or(defaults.cleanup_interval),
            enable_lru_eviction: self
                .enable_lru_eviction
                .unwrap_or(defaults.enable_lru_eviction),
            enable_metrics: self.enable_metrics.unwrap_or(defaults.enable_metrics),
        }
    }
}
