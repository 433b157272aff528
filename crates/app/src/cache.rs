//! In-process TTL cache backed by a tokio [`RwLock`].

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::ports::CacheHandler;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Entry<V> {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// In-process cache for values shared across requests.
///
/// Built once by the composition root and handed to the services that need
/// it. Concurrent writers follow last-write-wins.
pub struct InMemoryCache<V> {
    entries: RwLock<HashMap<String, Entry<V>>>,
}

impl<V> Default for InMemoryCache<V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<V> InMemoryCache<V> {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: Clone + Send + Sync> CacheHandler<V> for InMemoryCache<V> {
    fn get(&self, key: &str) -> impl Future<Output = Option<V>> + Send {
        async move {
            let entries = self.entries.read().await;
            entries
                .get(key)
                .filter(|entry| entry.is_live(Instant::now()))
                .map(|entry| entry.value.clone())
        }
    }

    fn set(&self, key: &str, value: V, ttl: Duration) -> impl Future<Output = V> + Send {
        async move {
            let now = Instant::now();
            let mut entries = self.entries.write().await;
            // drop the old entry first so its expiry is never carried over
            entries.remove(key);
            entries.retain(|_, entry| entry.is_live(now));
            entries.insert(
                key.to_string(),
                Entry {
                    value: value.clone(),
                    expires_at: now + ttl,
                },
            );
            value
        }
    }
}
