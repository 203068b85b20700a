//! Cache-aside behaviour of DataManager
//!
//! These tests verify:
//! - a miss reaches the provider and populates the cache
//! - a hit is served without touching the provider
//! - negative answers are recomputed on every call
//! - cache write failures never fail a query

mod common;

use common::{
    strings, BrokenProvider, CountingProvider, EmptyListCache, FailingCache, RecordingCache,
};
use quotebook_kg::{
    CacheConfig, DataManager, InMemoryDataProvider, MemoryCache, QuoteError, NO_RESULTS,
};
use quotebook_kg::schema::{Author, Quote, Tag};
use std::sync::Arc;

#[tokio::test]
async fn test_author_query_hits_cache_on_second_call() {
    let provider = Arc::new(CountingProvider::new().with_author(
        "Steve Martin",
        &["A day without sunshine is like, you know, night."],
    ));
    let cache = Arc::new(RecordingCache::new());
    let manager = DataManager::new(cache.clone(), provider.clone());

    let first = manager.query_by_author("Steve Martin").await.unwrap();
    assert_eq!(first, strings(&["A day without sunshine is like, you know, night."]));
    assert_eq!(provider.author_lookups(), 1);

    let second = manager.query_by_author("Steve Martin").await.unwrap();
    assert_eq!(second, first);
    assert_eq!(provider.author_lookups(), 1);

    assert_eq!(cache.reads(), strings(&["author:steve martin", "author:steve martin"]));
    assert_eq!(cache.writes(), strings(&["author:steve martin"]));
}

#[tokio::test]
async fn test_author_key_ignores_case() {
    let provider = Arc::new(CountingProvider::new().with_author("Mark Twain", &["Q"]));
    let cache = Arc::new(RecordingCache::new());
    let manager = DataManager::new(cache.clone(), provider.clone());

    manager.query_by_author("MARK TWAIN").await.unwrap();
    manager.query_by_author("mark twain").await.unwrap();

    assert_eq!(provider.author_lookups(), 1);
    assert_eq!(cache.stored("author:mark twain"), Some(strings(&["Q"])));
}

#[tokio::test]
async fn test_unknown_author_is_never_cached() {
    let provider = Arc::new(CountingProvider::new());
    let cache = Arc::new(RecordingCache::new());
    let manager = DataManager::new(cache.clone(), provider.clone());

    let first = manager.query_by_author("nonexistent").await.unwrap();
    assert_eq!(first, strings(&["Author with name 'Nonexistent' not found"]));

    let second = manager.query_by_author("nonexistent").await.unwrap();
    assert_eq!(second, first);

    assert_eq!(provider.author_lookups(), 2);
    assert!(cache.writes().is_empty());
}

#[tokio::test]
async fn test_author_without_quotes_is_never_cached() {
    let provider = Arc::new(CountingProvider::new().with_author("Silent Bob", &[]));
    let cache = Arc::new(RecordingCache::new());
    let manager = DataManager::new(cache.clone(), provider.clone());

    assert_eq!(manager.query_by_author("silent").await.unwrap(), strings(&[NO_RESULTS]));
    assert_eq!(manager.query_by_author("silent").await.unwrap(), strings(&[NO_RESULTS]));

    assert_eq!(provider.author_lookups(), 2);
    assert!(cache.writes().is_empty());
}

#[tokio::test]
async fn test_tag_key_keeps_input_order() {
    let provider = Arc::new(
        CountingProvider::new()
            .with_tag("life", &["Life quote"])
            .with_tag("love", &["Love quote"]),
    );
    let cache = Arc::new(RecordingCache::new());
    let manager = DataManager::new(cache.clone(), provider.clone());

    let quotes = manager.query_by_tags(&strings(&["life", "love"])).await.unwrap();
    assert_eq!(quotes, strings(&["Life quote", "Love quote"]));
    assert_eq!(cache.writes(), strings(&["tags:life,love"]));

    manager.query_by_tags(&strings(&["love", "life"])).await.unwrap();
    assert_eq!(cache.writes(), strings(&["tags:life,love", "tags:love,life"]));
    assert_eq!(provider.tag_lookups(), 2);
}

#[tokio::test]
async fn test_tag_query_hits_cache_on_second_call() {
    let provider = Arc::new(CountingProvider::new().with_tag("fun", &["Fun quote"]));
    let cache = Arc::new(RecordingCache::new());
    let manager = DataManager::new(cache, provider.clone());

    manager.query_by_tags(&strings(&["fun"])).await.unwrap();
    let second = manager.query_by_tags(&strings(&["fun"])).await.unwrap();

    assert_eq!(second, strings(&["Fun quote"]));
    assert_eq!(provider.tag_lookups(), 1);
}

#[tokio::test]
async fn test_empty_cached_list_counts_as_miss() {
    let provider = Arc::new(
        CountingProvider::new()
            .with_tag("fun", &["Fun quote"])
            .with_author("Steve Martin", &["One"]),
    );
    let cache = Arc::new(EmptyListCache::default());
    let manager = DataManager::new(cache.clone(), provider.clone());

    let quotes = manager.query_by_tags(&strings(&["fun"])).await.unwrap();
    assert_eq!(quotes, strings(&["Fun quote"]));
    assert_eq!(provider.tag_lookups(), 1);

    let quotes = manager.query_by_author("steve").await.unwrap();
    assert_eq!(quotes, strings(&["One"]));
    assert_eq!(provider.author_lookups(), 1);

    assert_eq!(cache.writes.load(std::sync::atomic::Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_empty_tag_result_is_never_cached() {
    let provider = Arc::new(CountingProvider::new());
    let cache = Arc::new(RecordingCache::new());
    let manager = DataManager::new(cache.clone(), provider.clone());

    assert_eq!(
        manager.query_by_tags(&strings(&["nothing"])).await.unwrap(),
        strings(&[NO_RESULTS])
    );
    manager.query_by_tags(&strings(&["nothing"])).await.unwrap();

    assert_eq!(provider.tag_lookups(), 2);
    assert!(cache.writes().is_empty());
}

#[tokio::test]
async fn test_cache_write_failure_does_not_fail_query() {
    let provider = Arc::new(
        CountingProvider::new()
            .with_author("Albert Einstein", &["Imagination is more important than knowledge."])
            .with_tag("science", &["Science quote"]),
    );
    let manager = DataManager::new(Arc::new(FailingCache), provider.clone());

    let quotes = manager.query_by_author("albert").await.unwrap();
    assert_eq!(quotes, strings(&["Imagination is more important than knowledge."]));

    let quotes = manager.query_by_tags(&strings(&["science"])).await.unwrap();
    assert_eq!(quotes, strings(&["Science quote"]));

    // nothing was stored, so the provider is asked again
    manager.query_by_author("albert").await.unwrap();
    assert_eq!(provider.author_lookups(), 2);
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let manager = DataManager::new(Arc::new(RecordingCache::new()), Arc::new(BrokenProvider));

    let err = manager.query_by_author("anyone").await.unwrap_err();
    assert!(matches!(err, QuoteError::ConnectionError(_)));

    let err = manager.query_by_tags(&strings(&["any"])).await.unwrap_err();
    assert!(matches!(err, QuoteError::ConnectionError(_)));
}

#[tokio::test]
async fn test_new_data_visible_after_negative_answer() {
    let provider = Arc::new(InMemoryDataProvider::new());
    let cache = Arc::new(MemoryCache::new(CacheConfig::default()));
    let manager = DataManager::new(cache.clone(), provider.clone());

    assert_eq!(
        manager.query_by_author("jane").await.unwrap(),
        strings(&["Author with name 'Jane' not found"])
    );

    let austen = provider.add_author(Author::new("Jane Austen")).await;
    assert_eq!(manager.query_by_author("jane").await.unwrap(), strings(&[NO_RESULTS]));

    provider
        .add_quote(Quote::new(
            austen,
            "There is no charm equal to tenderness of heart.",
            vec![Tag::new("heart")],
        ))
        .await
        .unwrap();

    assert_eq!(
        manager.query_by_author("jane").await.unwrap(),
        strings(&["There is no charm equal to tenderness of heart."])
    );
    assert_eq!(cache.len().await, 1);
    assert_eq!(cache.stats().await.misses, 3);
}
