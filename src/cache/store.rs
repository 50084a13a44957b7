//! Cache Store Module
//!
//! The plain map of cached payloads plus the reap pass that ages entries out.
//! `CacheStore` itself is single-threaded; the [`Cache`](crate::cache::Cache)
//! handle wraps it in a lock and shares it with the reaper task.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::CacheEntry;

// == Cache Store ==
/// Keyed payload storage with fixed-age expiry.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// How old an entry may grow before a reap pass removes it
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
        }
    }

    // == Add ==
    /// Stores a payload under `key`.
    ///
    /// An existing entry is replaced, not merged, and its age resets to zero.
    pub fn add(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.entries.insert(key.into(), CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if present.
    ///
    /// Age is deliberately not checked here: an entry past its interval stays
    /// visible until the next reap pass. That keeps lookups O(1) and makes
    /// staleness purely a function of the reaper's cadence.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry strictly older than the interval, as of `now`.
    ///
    /// Entries whose age is exactly the interval survive until the next pass.
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.age(now) <= self.interval);
        before - self.entries.len()
    }

    // == Interval ==
    /// The configured expiry interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
