//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
///
/// The cache itself has almost no error surface: `add` cannot fail and `get`
/// signals absence with `None`. Everything else here belongs to the fetch and
/// decode pipeline around it.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero expiry interval
    #[error("cache interval must be greater than zero")]
    InvalidInterval,

    /// HTTP request failed
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without a required argument
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
