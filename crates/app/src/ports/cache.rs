//! Cache port: keyed slots holding a value for a limited time.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// A key/value cache whose entries expire after a time-to-live.
///
/// The cache is a disposable projection: callers must be able to rebuild any
/// value from the system of record when [`get`](Self::get) returns `None`.
pub trait CacheHandler<V> {
    /// Return the value stored under `key`, or `None` when missing or expired.
    fn get(&self, key: &str) -> impl Future<Output = Option<V>> + Send;

    /// Store `value` under `key` for `ttl`, replacing any previous entry
    /// (and its expiry) outright. Returns the stored value.
    fn set(&self, key: &str, value: V, ttl: Duration) -> impl Future<Output = V> + Send;
}

impl<V, T: CacheHandler<V> + Send + Sync> CacheHandler<V> for Arc<T> {
    fn get(&self, key: &str) -> impl Future<Output = Option<V>> + Send {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: V, ttl: Duration) -> impl Future<Output = V> + Send {
        (**self).set(key, value, ttl)
    }
}
