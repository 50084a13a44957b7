//! Response models for the PokeAPI
//!
//! Defines the subset of the PokeAPI schema this client decodes. The cache
//! below these types is payload-agnostic; decoding always happens on the
//! caller side, whether the bytes came from the network or the cache.

pub mod location;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
