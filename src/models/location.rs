//! Location-area response models
//!
//! Shapes for the paginated `/location-area` listing and the per-area detail
//! record used by the `map`, `mapb` and `explore` commands.

use serde::Deserialize;

/// A named API resource with a link to its full record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. a location area or pokemon name
    pub name: String,
    /// URL of the full record
    pub url: String,
}

/// One page of the location-area listing, with links to neighboring pages.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas known to the API
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// Detail record for a single location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    /// Name of the location area
    pub name: String,
    /// Pokemon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The pokemon that may appear
    pub pokemon: NamedResource,
}
