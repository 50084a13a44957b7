//! Pokedex CLI - an interactive PokeAPI client
//!
//! Fetched responses are kept in an in-memory expiring cache so repeated
//! commands within a session never refetch the same URL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use tasks::spawn_reaper_task;
