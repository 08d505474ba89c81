//! Bounded, expiring memo for search results.
//!
//! Capacity is a hard bound on stored entries. When full, the entry inserted
//! earliest is evicted (insertion order, not LRU: reads never reorder).
//! Expiry is absolute per entry and checked lazily when the key is read.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use qomus_config::cache::CacheConfig;
use tokio::sync::Mutex;

use crate::dictionary::SourceSet;

/// Cache key for a search: `dict:<lowercased trimmed query>:<sorted source tags>`
pub fn search_key(query: &str, sources: Option<&SourceSet>) -> String {
    let mut tags: Vec<&str> = sources
        .map(|set| set.iter().map(|s| s.as_str()).collect())
        .unwrap_or_default();
    tags.sort_unstable();
    let tags = tags.join(",");

    format!("dict:{}:{}", query.trim().to_lowercase(), tags)
}

struct Cached<V> {
    value: V,
    expires_at: Instant,
}

struct CacheState<V> {
    entries: HashMap<String, Cached<V>>,
    order: VecDeque<String>,
}

pub struct ResultCache<V> {
    max_size: usize,
    ttl: Duration,
    state: Mutex<CacheState<V>>,
}

impl<V: Clone> ResultCache<V> {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            max_size,
            ttl,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_size, Duration::from_secs(config.ttl_seconds))
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Get a live value, dropping it if it has expired
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut state = self.state.lock().await;

        let expired = match state.entries.get(key) {
            Some(cached) if cached.expires_at > Instant::now() => {
                return Some(cached.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            state.entries.remove(key);
            state.order.retain(|k| k != key);
            tracing::debug!("Cache entry expired: {}", key);
        }

        None
    }

    pub async fn insert(&self, key: String, value: V) {
        if self.max_size == 0 {
            return;
        }

        let mut state = self.state.lock().await;

        if state.entries.contains_key(&key) {
            state.order.retain(|k| k != &key);
        } else {
            while state.entries.len() >= self.max_size {
                let Some(oldest) = state.order.pop_front() else {
                    break;
                };
                state.entries.remove(&oldest);
            }
        }

        state.order.push_back(key.clone());
        state.entries.insert(
            key,
            Cached {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.entries.clear();
        state.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dictionary::Source;

    #[test]
    fn key_lowercases_trims_and_sorts_sources() {
        let sources: SourceSet = [Source::Modern, Source::Classic].into_iter().collect();
        assert_eq!(search_key("  Kitob ", Some(&sources)), "dict:kitob:classic,modern");
        assert_eq!(search_key("كتب", None), "dict:كتب:");
        assert_eq!(search_key("x", Some(&SourceSet::new())), "dict:x:");
    }

    #[test]
    fn key_tags_sort_by_name_not_declaration() {
        let sources: SourceSet = [Source::Main, Source::Classic, Source::Custom].into_iter().collect();
        assert_eq!(search_key("x", Some(&sources)), "dict:x:classic,custom,main");
    }

    #[tokio::test]
    async fn evicts_in_insertion_order_not_by_use() {
        let cache = ResultCache::new(2, Duration::from_secs(60));
        cache.insert("a".into(), 1).await;
        cache.insert("b".into(), 2).await;

        // Reading "a" must not protect it
        assert_eq!(cache.get("a").await, Some(1));

        cache.insert("c".into(), 3).await;
        assert_eq!(cache.get("a").await, None);
        assert_eq!(cache.get("b").await, Some(2));
        assert_eq!(cache.get("c").await, Some(3));
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn reinserting_a_key_does_not_evict() {
        let cache = ResultCache::new(2, Duration::from_secs(60));
        cache.insert("a".into(), 1).await;
        cache.insert("b".into(), 2).await;
        cache.insert("a".into(), 10).await;

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.get("a").await, Some(10));

        // "b" is now the oldest insertion
        cache.insert("c".into(), 3).await;
        assert_eq!(cache.get("b").await, None);
        assert_eq!(cache.get("a").await, Some(10));
    }

    #[tokio::test]
    async fn expired_entries_are_dropped_on_read() {
        let cache = ResultCache::new(4, Duration::from_millis(20));
        cache.insert("a".into(), 1).await;
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(cache.get("a").await, None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn zero_capacity_stores_nothing() {
        let cache = ResultCache::new(0, Duration::from_secs(60));
        cache.insert("a".into(), 1).await;
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn concurrent_inserts_respect_capacity() {
        let cache = Arc::new(ResultCache::new(8, Duration::from_secs(60)));
        let mut handles = Vec::new();

        for i in 0..64 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                cache.insert(format!("k{}", i), i).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.len().await, 8);
    }
}
