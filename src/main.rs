//! Pokedex CLI - an interactive PokeAPI client
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the response cache, starting its background reaper
//! 4. Create the PokeAPI client on top of the cache
//! 5. Run the REPL until exit, end of input, or Ctrl+C
//! 6. Close the cache on the way out

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedexcli::api::PokeApiClient;
use pokedexcli::{Cache, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedexcli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, api_base_url={}",
        config.cache_ttl_secs, config.api_base_url
    );

    let cache = Cache::new(config.cache_interval())?;
    let client = PokeApiClient::new(cache.clone(), config.api_base_url.clone());
    info!("Response cache initialized, reaper running");

    let result = tokio::select! {
        result = pokedexcli::repl::run(&client) => result,
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
            Ok(())
        }
    };

    cache.close();
    info!("Cache reaper stopped, goodbye");

    result
}
