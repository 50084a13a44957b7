//! Cache Entry Module
//!
//! Defines the structure for individual cached payloads.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload with its insertion timestamp.
///
/// The cache owns the payload outright: `Cache::add` takes an owned buffer
/// and `Cache::get` hands back an independent copy, so a caller can never
/// mutate stored bytes in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was inserted or last overwritten
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Elapsed time between this entry's last write and `now`.
    ///
    /// Saturates to zero if `now` predates the write, which can happen when
    /// the reaper captured its timestamp just before a concurrent overwrite.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_holds_payload() {
        let entry = CacheEntry::new(vec![1, 2, 3]);
        assert_eq!(entry.value, vec![1, 2, 3]);
    }

    #[test]
    fn test_entry_age_grows() {
        let entry = CacheEntry::new(vec![0]);

        let early = entry.age(Instant::now());
        sleep(Duration::from_millis(20));
        let late = entry.age(Instant::now());

        assert!(late > early);
        assert!(late >= Duration::from_millis(20));
    }

    #[test]
    fn test_entry_age_saturates_for_past_instants() {
        let before = Instant::now();
        sleep(Duration::from_millis(5));
        let entry = CacheEntry::new(vec![0]);

        assert_eq!(entry.age(before), Duration::ZERO);
    }
}
