// Expiring cache entries layered over a key/value store.
// Handles JSON (de)serialization and TTL checks for the repository list.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::Result;

use super::store::KeyValueStore;

/// Wrapper for cached data with its write time in epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub timestamp: i64,
    pub data: T,
}

impl<T> CacheEntry<T> {
    /// Create an entry stamped with `now`.
    pub fn new(data: T, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now.timestamp_millis(),
            data,
        }
    }

    /// Valid while `now - timestamp < ttl`. Entries stamped in the future are expired.
    pub fn is_valid(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let elapsed = now.timestamp_millis() - self.timestamp;
        elapsed >= 0 && (elapsed as u128) < ttl.as_millis()
    }
}

/// A single expiring entry under a fixed key.
///
/// Expired entries are never deleted; the next [`ExpiringCache::write`]
/// overwrites them.
#[derive(Debug)]
pub struct ExpiringCache<S> {
    store: S,
    key: String,
    ttl: Duration,
}

impl<S: KeyValueStore> ExpiringCache<S> {
    pub fn new(store: S, key: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store,
            key: key.into(),
            ttl,
        }
    }

    /// Read the entry if present, parseable, and unexpired.
    /// Malformed JSON counts as a miss.
    pub fn read<T: DeserializeOwned>(&self, now: DateTime<Utc>) -> Option<T> {
        let raw = self.store.get(&self.key)?;
        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "ignoring malformed cache entry");
                return None;
            }
        };

        if entry.is_valid(now, self.ttl) {
            Some(entry.data)
        } else {
            tracing::debug!(key = %self.key, "cache entry expired");
            None
        }
    }

    /// Replace the entry with `data` stamped at `now`.
    pub fn write<T: Serialize>(&mut self, data: &T, now: DateTime<Utc>) -> Result<()> {
        let json = serde_json::to_string(&CacheEntry::new(data, now))?;
        self.store.set(&self.key, json)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
