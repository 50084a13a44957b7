//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long cached API responses stay retrievable, in seconds
    pub cache_ttl_secs: u64,
    /// Base URL of the PokeAPI endpoint
    pub api_base_url: String,
}

/// Default cache lifetime: five minutes, plenty for an interactive session.
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache entry lifetime in seconds (default: 300)
    /// - `POKEAPI_URL` - Base URL of the PokeAPI (default: the public API)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            api_base_url: env::var("POKEAPI_URL")
                .ok()
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }

    /// The cache lifetime as a `Duration`.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
