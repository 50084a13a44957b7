//! Cache Reaper Task
//!
//! Background task that periodically sweeps stale entries out of the cache.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background task that removes stale cache entries.
///
/// The task sleeps for `period` between sweeps. Each sweep locks the store,
/// computes the current time once, and removes every entry older than the
/// store's interval; entries added while a sweep holds the lock can never be
/// caught by that sweep. An empty store makes the sweep a no-op.
///
/// The returned handle can be aborted to stop the task; `Cache::close` does
/// exactly that during shutdown.
pub fn spawn_reaper_task(store: Arc<Mutex<CacheStore>>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(?period, "cache reaper started");

        loop {
            // First sweep fires one full period after startup, like a ticker.
            tokio::time::sleep(period).await;

            let removed = {
                let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
                store.reap(Instant::now())
            };

            if removed > 0 {
                info!(removed, "cache reaper removed stale entries");
            } else {
                debug!("cache reaper found nothing stale");
            }
        }
    })
}
