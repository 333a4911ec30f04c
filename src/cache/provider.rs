//! Registry of named caches
//!
//! Services built from the same provider share the same underlying caches,
//! so creating a second service never resets what the first one warmed up.

use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use super::NamedCache;
use crate::error::{PicError, Result};

type AnyCache = Arc<dyn Any + Send + Sync>;

/// Shared registry handing out named, capacity-bounded caches.
///
/// Cloning the provider clones the handle, not the caches.
#[derive(Clone, Default)]
pub struct CacheProvider {
    caches: Arc<Mutex<HashMap<String, AnyCache>>>,
}

impl CacheProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cache registered under `name`, creating it on first use.
    ///
    /// `capacity` only applies when the cache is created; an existing cache
    /// keeps its contents and original capacity.
    pub fn get_or_create<K, V>(
        &self,
        name: &str,
        capacity: usize,
    ) -> Result<Arc<NamedCache<K, V>>>
    where
        K: Hash + Eq + Send + 'static,
        V: Clone + Send + 'static,
    {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| PicError::InvalidCapacity {
            name: name.to_string(),
            capacity,
        })?;

        let mut caches = self.registry();
        if let Some(existing) = caches.get(name) {
            log::debug!("Reusing cache '{}'", name);
            return Arc::clone(existing)
                .downcast::<NamedCache<K, V>>()
                .map_err(|_| PicError::CacheTypeMismatch(name.to_string()));
        }

        log::debug!("Creating cache '{}' with capacity {}", name, capacity);
        let cache = Arc::new(NamedCache::<K, V>::new(name, capacity));
        caches.insert(name.to_string(), Arc::clone(&cache) as AnyCache);
        Ok(cache)
    }

    /// Look up an existing cache without creating it
    pub fn get<K, V>(&self, name: &str) -> Option<Arc<NamedCache<K, V>>>
    where
        K: Hash + Eq + Send + 'static,
        V: Clone + Send + 'static,
    {
        let caches = self.registry();
        let existing = caches.get(name)?;
        Arc::clone(existing).downcast::<NamedCache<K, V>>().ok()
    }

    /// Names of all registered caches, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry().keys().cloned().collect();
        names.sort();
        names
    }

    fn registry(&self) -> MutexGuard<'_, HashMap<String, AnyCache>> {
        // Registry updates are single inserts, so a poisoned map is still consistent
        self.caches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
