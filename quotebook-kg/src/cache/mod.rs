//! # Query Result Cache
//!
//! The cache sits in front of the quote store. [`crate::DataManager`] only
//! talks to it through the [`Cache`] trait, so any key-value backend can be
//! plugged in; [`MemoryCache`] is the in-process backend the CLI uses.
//!
//! ## Keys
//!
//! Keys are `"<namespace>:<lower-cased argument>"`, built by [`build_key`]:
//!
//! ```rust
//! use quotebook_kg::cache::{build_key, Namespace};
//!
//! assert_eq!(build_key(Namespace::Author, "Steve Martin"), "author:steve martin");
//! assert_eq!(build_key(Namespace::Tags, "life,love"), "tags:life,love");
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quotebook_kg::cache::{Cache, CacheConfig, MemoryCache};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = CacheConfig::builder()
//!     .default_ttl(Duration::from_secs(3600))
//!     .max_entries(10_000)
//!     .build();
//!
//! let cache = MemoryCache::new(config);
//!
//! cache.set("tags:life", &["Life is what happens...".to_string()]).await?;
//!
//! if let Some(quotes) = cache.get("tags:life").await {
//!     println!("Cache hit: {:?}", quotes);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entry;
pub mod store;
pub mod types;

pub use config::{CacheConfig, CacheConfigBuilder};
pub use entry::{CacheEntry, CacheMetadata};
pub use store::{start_auto_cleanup, MemoryCache};
pub use types::{build_key, CacheKey, CacheStats, CacheValue, Namespace};

use crate::error::Result;
use async_trait::async_trait;

/// Key-value cache consumed by the cache-aside read path
///
/// Implementations must be safe to call from several tasks at once.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Build the key for a query. Pure; lower-cases `argument`.
    fn build_key(&self, namespace: Namespace, argument: &str) -> CacheKey {
        build_key(namespace, argument)
    }

    /// Cached quote list for `key`, or `None` on a miss.
    ///
    /// Backend failures are reported as a miss, never as an error.
    async fn get(&self, key: &str) -> Option<Vec<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &[String]) -> Result<()>;
}
