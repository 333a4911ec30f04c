//! Bounded LRU cache shared between service instances and background tasks

use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;

/// Capacity-bounded LRU map with a registry name.
///
/// Values are cloned out on read so the lock is never held across an await.
pub struct NamedCache<K, V> {
    name: String,
    entries: Mutex<LruCache<K, V>>,
}

impl<K, V> NamedCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    pub fn new(name: impl Into<String>, capacity: NonZeroUsize) -> Self {
        Self {
            name: name.into(),
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a value, marking it most recently used
    pub async fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().await.get(key).cloned()
    }

    /// Insert a value, evicting the least recently used entry when full
    pub async fn put(&self, key: K, value: V) {
        self.entries.lock().await.put(key, value);
    }

    /// Insert many values under a single lock
    pub async fn put_all(&self, items: impl IntoIterator<Item = (K, V)>) {
        let mut entries = self.entries.lock().await;
        for (key, value) in items {
            entries.put(key, value);
        }
    }

    /// Check for a key without touching LRU order
    pub async fn contains(&self, key: &K) -> bool {
        self.entries.lock().await.contains(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.entries.lock().await.cap().get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> NamedCache<String, u32> {
        NamedCache::new("test", NonZeroUsize::new(capacity).unwrap())
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let cache = cache(4);
        assert!(cache.is_empty().await);

        cache.put("a".to_string(), 1).await;

        assert_eq!(cache.get(&"a".to_string()).await, Some(1));
        assert_eq!(cache.get(&"b".to_string()).await, None);
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.name(), "test");
    }

    #[tokio::test]
    async fn test_evicts_least_recently_used() {
        let cache = cache(2);
        cache.put("a".to_string(), 1).await;
        cache.put("b".to_string(), 2).await;

        // Touch "a" so "b" becomes the oldest
        assert_eq!(cache.get(&"a".to_string()).await, Some(1));
        cache.put("c".to_string(), 3).await;

        assert!(cache.contains(&"a".to_string()).await);
        assert!(!cache.contains(&"b".to_string()).await);
        assert!(cache.contains(&"c".to_string()).await);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_value() {
        let cache = cache(2);
        cache.put("a".to_string(), 1).await;
        cache.put("a".to_string(), 10).await;

        assert_eq!(cache.get(&"a".to_string()).await, Some(10));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_all_respects_capacity() {
        let cache = cache(3);
        cache
            .put_all((0..5).map(|i| (format!("k{}", i), i)))
            .await;

        assert_eq!(cache.len().await, 3);
        assert_eq!(cache.capacity().await, 3);
        assert!(!cache.contains(&"k0".to_string()).await);
        assert!(!cache.contains(&"k1".to_string()).await);
        assert_eq!(cache.get(&"k4".to_string()).await, Some(4));
    }
}
