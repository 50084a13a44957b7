//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of their owner.
//!
//! # Tasks
//! - Cache reaper: removes stale cache entries on a fixed cadence

mod reaper;

pub use reaper::spawn_reaper_task;
