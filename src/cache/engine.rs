use chrono::Duration;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};
use super::entry::CacheEntry;
use super::store::KeyValueStore;

/// Seven days, in milliseconds.
pub const DEFAULT_TTL_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Compute-once-per-window cache over a [`KeyValueStore`].
///
/// Store failures never reach the caller: a failed or unparsable read is a
/// miss, a failed write is logged and dropped.
#[derive(Debug)]
pub struct SelectionCache<S, C = SystemClock> {
    store: S,
    clock: C,
    ttl: Duration,
}

impl<S: KeyValueStore> SelectionCache<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock, Duration::milliseconds(DEFAULT_TTL_MS))
    }
}

impl<S, C> SelectionCache<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    pub fn with_clock(store: S, clock: C, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read the entry under `key`. Absent, unreadable and corrupt entries
    /// all come back as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<CacheEntry<T>> {
        let raw = match self.store.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read cache entry");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(key, error = %e, "discarding corrupt cache entry");
                None
            }
        }
    }

    /// `now - timestamp < ttl`.
    pub fn is_valid<T>(&self, entry: &CacheEntry<T>) -> bool {
        self.clock.now() - entry.timestamp < self.ttl
    }

    /// Stamp `data` with the current time and persist it, replacing whatever
    /// was stored under `key`.
    pub fn put<T: Serialize>(&mut self, key: &str, data: &T) {
        let entry = CacheEntry::new(self.clock.now(), data);
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize cache entry");
                return;
            }
        };

        if let Err(e) = self.store.write(key, &raw) {
            warn!(key, error = %e, "failed to write cache entry");
        }
    }

    /// Return the cached value under `key` if it is still within the TTL,
    /// otherwise run `compute`, persist its result and return it.
    pub fn get_or_compute<T, F>(&mut self, key: &str, compute: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.get::<T>(key) {
            Some(entry) if self.is_valid(&entry) => {
                debug!(key, "cache hit");
                return entry.data;
            }
            Some(entry) => {
                debug!(key, stored_at = %entry.timestamp, "cache entry expired");
            }
            None => {
                debug!(key, "cache miss");
            }
        }

        let data = compute();
        self.put(key, &data);
        data
    }
}
