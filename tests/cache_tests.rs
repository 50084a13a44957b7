//! Integration Tests for the Expiring Cache
//!
//! Exercises the public `Cache` API end to end: miss/hit, overwrite,
//! key independence, reaper-driven expiry, and concurrent access.

use std::thread;
use std::time::Duration;

use pokedexcli::Cache;

// == Miss Then Hit ==

#[tokio::test]
async fn test_fresh_cache_misses_then_hits_after_add() {
    let cache = Cache::new(Duration::from_secs(60)).unwrap();

    assert_eq!(cache.get("https://pokeapi.co/api/v2/location-area"), None);

    cache.add(
        "https://pokeapi.co/api/v2/location-area",
        vec![10, 20, 30],
    );
    assert_eq!(
        cache.get("https://pokeapi.co/api/v2/location-area"),
        Some(vec![10, 20, 30])
    );

    cache.close();
}

// == Overwrite ==

#[tokio::test]
async fn test_add_overwrites_existing_entry() {
    let cache = Cache::new(Duration::from_secs(60)).unwrap();

    cache.add("key", vec![1]);
    cache.add("key", vec![2]);

    assert_eq!(cache.get("key"), Some(vec![2]));
    assert_eq!(cache.len(), 1);

    cache.close();
}

#[tokio::test]
async fn test_overwrite_resets_entry_age() {
    // Interval 200ms: rewriting the key every 120ms keeps it alive well past
    // several reap ticks, proving each overwrite restarts the clock.
    let cache = Cache::new(Duration::from_millis(200)).unwrap();

    for round in 0u8..6 {
        cache.add("refreshed", vec![round]);
        tokio::time::sleep(Duration::from_millis(120)).await;
    }

    assert_eq!(cache.get("refreshed"), Some(vec![5]));

    cache.close();
}

// == Independent Keys ==

#[tokio::test]
async fn test_keys_do_not_interfere() {
    let cache = Cache::new(Duration::from_secs(60)).unwrap();

    cache.add("alpha", vec![1]);
    cache.add("beta", vec![2]);
    cache.add("alpha", vec![3]);

    assert_eq!(cache.get("beta"), Some(vec![2]));
    assert_eq!(cache.get("alpha"), Some(vec![3]));
    assert_eq!(cache.get("gamma"), None);

    cache.close();
}

// == Expiry Boundary ==

#[tokio::test]
async fn test_entry_survives_before_first_tick_and_expires_after() {
    let cache = Cache::new(Duration::from_millis(200)).unwrap();

    cache.add("x", vec![1, 2, 3]);

    // Well inside the interval, before any tick can have fired.
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(cache.get("x"), Some(vec![1, 2, 3]));

    // Several ticks later the entry's age has clearly exceeded the interval.
    tokio::time::sleep(Duration::from_millis(520)).await;
    assert_eq!(cache.get("x"), None);
    assert!(cache.is_empty());

    cache.close();
}

#[tokio::test]
async fn test_reaper_only_removes_stale_entries() {
    let cache = Cache::new(Duration::from_millis(200)).unwrap();

    cache.add("old", vec![1]);
    tokio::time::sleep(Duration::from_millis(250)).await;
    cache.add("young", vec![2]);

    // At ~500ms the sweep at ~400ms has removed "old" (age well past the
    // interval) while "young" is still inside its own interval.
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(cache.get("old"), None);
    assert_eq!(cache.get("young"), Some(vec![2]));

    cache.close();
}

// == Reap Is Periodic, Not Eager ==

#[tokio::test]
async fn test_no_expiry_without_a_tick() {
    let cache = Cache::new(Duration::from_millis(100)).unwrap();

    // With the reaper stopped, wall-clock staleness alone removes nothing:
    // get never checks age, and no sweep will ever fire again.
    cache.close();

    cache.add("stale-but-visible", vec![9]);
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(cache.get("stale-but-visible"), Some(vec![9]));
}

// == Concurrent Access ==

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_adds_and_gets_with_reaper_running() {
    const THREADS: usize = 8;
    const OPS_PER_THREAD: usize = 2_000;

    let cache = Cache::new(Duration::from_secs(60)).unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = format!("thread{}/key{}", thread_id, i);
                    let value = vec![thread_id as u8, (i % 256) as u8];

                    cache.add(key.clone(), value.clone());
                    assert_eq!(cache.get(&key), Some(value), "lost update on {}", key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    // Every key written within the interval is still retrievable.
    assert_eq!(cache.len(), THREADS * OPS_PER_THREAD);
    for thread_id in 0..THREADS {
        let key = format!("thread{}/key{}", thread_id, OPS_PER_THREAD - 1);
        assert!(cache.get(&key).is_some());
    }

    cache.close();
}

// == Lifecycle ==

#[tokio::test]
async fn test_close_stops_the_reaper() {
    let cache = Cache::new(Duration::from_millis(80)).unwrap();

    cache.add("kept", vec![1]);
    cache.close();

    // Long past the interval; without a live reaper the entry persists.
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(cache.get("kept"), Some(vec![1]));
}

#[tokio::test]
async fn test_close_twice_is_safe() {
    let cache = Cache::new(Duration::from_millis(80)).unwrap();
    cache.close();
    cache.close();
}

#[tokio::test]
async fn test_zero_interval_is_rejected() {
    assert!(Cache::new(Duration::ZERO).is_err());
}
