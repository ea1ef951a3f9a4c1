//! Time-bounded memoization of remote reads.
//!
//! One value per key. A value is served while it is younger than the TTL
//! given by the caller; after that the next call fetches again. Failed
//! fetches are never stored. Values are shared as `Arc` snapshots and
//! replaced whole, so a reader never sees a half-built value.

use crate::errors::AppResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

struct Entry<V> {
    stored_at: Instant,
    value: Arc<V>,
}

pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<V> TtlCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
        // a panic while holding the lock cannot leave a partial entry
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cached value for `key` if still within `ttl`.
    pub fn get(&self, key: &str, ttl: Duration) -> Option<Arc<V>> {
        self.lock()
            .get(key)
            .filter(|e| e.stored_at.elapsed() < ttl)
            .map(|e| Arc::clone(&e.value))
    }

    pub fn put(&self, key: &str, value: V) -> Arc<V> {
        let value = Arc::new(value);
        self.lock().insert(
            key.to_string(),
            Entry {
                stored_at: Instant::now(),
                value: Arc::clone(&value),
            },
        );
        value
    }

    /// Serve the cached value or run `fetch` and store its result.
    pub fn get_or_fetch<F>(&self, key: &str, ttl: Duration, fetch: F) -> AppResult<Arc<V>>
    where
        F: FnOnce() -> AppResult<V>,
    {
        if let Some(value) = self.get(key, ttl) {
            debug!(key, "cache hit");
            return Ok(value);
        }

        debug!(key, "cache miss");
        let value = fetch()?;
        Ok(self.put(key, value))
    }

    pub fn invalidate(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
