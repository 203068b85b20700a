//! Stub collaborators shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use quotebook_kg::schema::Author;
use quotebook_kg::{Cache, DataProvider, QuoteError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider with fixed answers that counts every call
#[derive(Default)]
pub struct CountingProvider {
    authors: Vec<Author>,
    quotes_by_author: HashMap<String, Vec<String>>,
    quotes_by_tag: HashMap<String, Vec<String>>,
    pub author_lookups: AtomicUsize,
    pub author_quote_lookups: AtomicUsize,
    pub tag_lookups: AtomicUsize,
}

impl CountingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, fullname: &str, quotes: &[&str]) -> Self {
        let author = Author::new(fullname);
        self.quotes_by_author
            .insert(author.id.clone(), quotes.iter().map(|q| q.to_string()).collect());
        self.authors.push(author);
        self
    }

    pub fn with_tag(mut self, tag: &str, quotes: &[&str]) -> Self {
        self.quotes_by_tag
            .insert(tag.to_string(), quotes.iter().map(|q| q.to_string()).collect());
        self
    }

    pub fn author_lookups(&self) -> usize {
        self.author_lookups.load(Ordering::SeqCst)
    }

    pub fn tag_lookups(&self) -> usize {
        self.tag_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataProvider for CountingProvider {
    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>> {
        self.author_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.authors.iter().find(|a| a.matches_prefix(name)).cloned())
    }

    async fn find_quotes_by_author(&self, author: &Author) -> Result<Vec<String>> {
        self.author_quote_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .quotes_by_author
            .get(&author.id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_quotes_by_tags(&self, tags: &[String]) -> Result<Vec<String>> {
        self.tag_lookups.fetch_add(1, Ordering::SeqCst);
        let mut quotes: Vec<String> = Vec::new();
        for tag in tags {
            for quote in self.quotes_by_tag.get(tag).into_iter().flatten() {
                if !quotes.contains(quote) {
                    quotes.push(quote.clone());
                }
            }
        }
        Ok(quotes)
    }
}

/// Provider whose every call fails
pub struct BrokenProvider;

#[async_trait]
impl DataProvider for BrokenProvider {
    async fn find_author_by_name(&self, _name: &str) -> Result<Option<Author>> {
        Err(QuoteError::ConnectionError("store unreachable".to_string()))
    }

    async fn find_quotes_by_author(&self, _author: &Author) -> Result<Vec<String>> {
        Err(QuoteError::ConnectionError("store unreachable".to_string()))
    }

    async fn find_quotes_by_tags(&self, _tags: &[String]) -> Result<Vec<String>> {
        Err(QuoteError::ConnectionError("store unreachable".to_string()))
    }
}

/// Cache that records every key it is asked for and every write
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, Vec<String>>>,
    pub reads: Mutex<Vec<String>>,
    pub writes: Mutex<Vec<String>>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn stored(&self, key: &str) -> Option<Vec<String>> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl Cache for RecordingCache {
    async fn get(&self, key: &str) -> Option<Vec<String>> {
        self.reads.lock().unwrap().push(key.to_string());
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &[String]) -> Result<()> {
        self.writes.lock().unwrap().push(key.to_string());
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Cache that never holds anything and rejects every write
pub struct FailingCache;

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> Option<Vec<String>> {
        None
    }

    async fn set(&self, _key: &str, _value: &[String]) -> Result<()> {
        Err(QuoteError::CacheError("backend unreachable".to_string()))
    }
}

/// Cache that answers every read with an empty list
#[derive(Default)]
pub struct EmptyListCache {
    pub writes: AtomicUsize,
}

#[async_trait]
impl Cache for EmptyListCache {
    async fn get(&self, _key: &str) -> Option<Vec<String>> {
        Some(Vec::new())
    }

    async fn set(&self, _key: &str, _value: &[String]) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
