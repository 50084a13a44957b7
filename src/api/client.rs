//! PokeAPI HTTP client
//!
//! Fetches raw response bodies keyed by URL, consulting the cache first so a
//! page revisited within the cache interval never hits the network twice.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage};

// == PokeAPI Client ==
/// Client for the PokeAPI with response caching.
///
/// The cache stores opaque bytes keyed by request URL; decoding happens after
/// retrieval, identically for cached and fresh bodies.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: Cache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client that caches responses in `cache` and resolves
    /// endpoints against `base_url` (no trailing slash).
    pub fn new(cache: Cache, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            cache,
            base_url: base_url.into(),
        }
    }

    /// URL of the first page of the location-area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// URL of the detail record for one location area.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    // == Location Areas ==
    /// Fetches one page of the location-area listing from `url`.
    ///
    /// `url` is either [`Self::location_areas_url`] or a `next`/`previous`
    /// link from a previously fetched page.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        let body = self.fetch_bytes(url).await?;
        decode(&body)
    }

    // == Location Area Detail ==
    /// Fetches the detail record for the location area called `name`.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = self.location_area_url(name);
        let body = self.fetch_bytes(&url).await?;
        decode(&body)
    }

    // == Fetch ==
    /// Returns the raw response body for `url`, from cache when possible.
    ///
    /// On a miss the body is fetched, stored under the URL, and returned;
    /// non-2xx statuses are errors and leave the cache untouched.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(%url, "cache hit");
            return Ok(body);
        }

        debug!(%url, "cache miss, fetching");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?.to_vec();

        self.cache.add(url, body.clone());
        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}
