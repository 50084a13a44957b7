//! PokeAPI Client Module
//!
//! HTTP access to the PokeAPI with transparent response caching.

mod client;

pub use client::PokeApiClient;
