//! Cache Module
//!
//! Provides an in-memory expiring cache for raw API responses, shared between
//! caller threads and one background reaper task.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Thread-safe handle to an expiring cache.
///
/// Cloning yields another handle to the same underlying store. Creating a
/// cache spawns exactly one background reaper task, so construction must
/// happen inside a tokio runtime. Call [`Cache::close`] to stop the reaper
/// once the cache is no longer needed; skipping it is acceptable only for a
/// cache that lives for the whole process.
///
/// Entries stay retrievable for at least the configured interval and for at
/// most one reaper period beyond it. `get` never checks age itself, so a
/// stale entry remains visible until the next sweep.
#[derive(Debug, Clone)]
pub struct Cache {
    /// Entry map, shared with the reaper task
    store: Arc<Mutex<CacheStore>>,
    /// Handle to the reaper task, taken by the first `close`
    reaper: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose entries expire after `interval` and starts the
    /// reaper that enforces it, sweeping once per `interval`.
    ///
    /// Returns [`PokedexError::InvalidInterval`] if `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval);
        }

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let reaper = spawn_reaper_task(store.clone(), interval);

        Ok(Self {
            store,
            reaper: Arc::new(Mutex::new(Some(reaper))),
        })
    }

    // == Add ==
    /// Stores a payload under `key`, replacing any previous entry and
    /// resetting its age to zero. Never fails.
    pub fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.lock_store().add(key, value);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if present.
    ///
    /// Presence is the only criterion: an entry past its interval is still
    /// returned until the reaper removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock_store().get(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lock_store().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock_store().is_empty()
    }

    // == Close ==
    /// Stops the background reaper task.
    ///
    /// Safe to call more than once; every call after the first is a no-op.
    /// The store itself stays usable, but nothing expires afterwards.
    pub fn close(&self) {
        let handle = self
            .reaper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }

    fn lock_store(&self) -> MutexGuard<'_, CacheStore> {
        // A poisoned lock means a holder panicked mid-operation; the map is
        // still structurally valid, so keep serving rather than propagate.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
