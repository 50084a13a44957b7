//! REPL command table and handlers
//!
//! One handler per command, plus the table `help` prints. Handlers write
//! their output straight to stdout and report errors upward so the loop can
//! print them and keep going.

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::repl::ReplState;

// == Command Table ==
/// A command as listed by `help`.
pub struct CommandSpec {
    /// The word the user types
    pub name: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
}

/// Every command the REPL understands, in `help` display order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandSpec {
        name: "map",
        description: "Displays the next 20 location areas",
    },
    CommandSpec {
        name: "mapb",
        description: "Displays the previous 20 location areas",
    },
    CommandSpec {
        name: "explore",
        description: "Displays the Pokemon found in an area",
    },
];

/// What the loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input
    Continue,
    /// Leave the loop and shut down
    Quit,
}

// == Dispatch ==
/// Runs the command called `name` with `args`.
///
/// Unknown commands are reported on stdout rather than as errors, matching
/// the interactive tone of the rest of the output.
pub async fn dispatch(
    name: &str,
    args: &[String],
    state: &mut ReplState,
    client: &PokeApiClient,
) -> Result<Outcome> {
    match name {
        "help" => help_command(),
        "exit" => exit_command(),
        "map" => map_command(state, client).await,
        "mapb" => mapb_command(state, client).await,
        "explore" => explore_command(args, client).await,
        _ => {
            println!("Unknown command");
            Ok(Outcome::Continue)
        }
    }
}

fn help_command() -> Result<Outcome> {
    println!("Welcome to the Pokedex!\nUsage:");
    for command in COMMANDS {
        println!("{}: {}", command.name, command.description);
    }
    Ok(Outcome::Continue)
}

fn exit_command() -> Result<Outcome> {
    println!("Closing the Pokedex... Goodbye!");
    Ok(Outcome::Quit)
}

// == Map ==
/// Shows the next page of location areas and advances the cursor.
async fn map_command(state: &mut ReplState, client: &PokeApiClient) -> Result<Outcome> {
    let url = state
        .next
        .clone()
        .unwrap_or_else(|| client.location_areas_url());

    show_page(&url, state, client).await
}

// == Map Back ==
/// Shows the previous page of location areas.
///
/// Before any page has been fetched there is nothing to go back to, so the
/// first page is shown instead; on the first page it just says so.
async fn mapb_command(state: &mut ReplState, client: &PokeApiClient) -> Result<Outcome> {
    let Some(url) = state.previous.clone() else {
        if state.next.is_none() {
            println!("Showing the first page of locations:");
            return map_command(state, client).await;
        }
        println!("you're on the first page");
        return Ok(Outcome::Continue);
    };

    show_page(&url, state, client).await
}

async fn show_page(url: &str, state: &mut ReplState, client: &PokeApiClient) -> Result<Outcome> {
    let page = client.location_areas(url).await?;

    for area in &page.results {
        println!("{}", area.name);
    }

    state.next = page.next;
    state.previous = page.previous;
    Ok(Outcome::Continue)
}

// == Explore ==
/// Lists the Pokemon encountered in one location area.
///
/// Multi-word input is joined with `-`, so `explore pastoria city area`
/// resolves to `pastoria-city-area`.
async fn explore_command(args: &[String], client: &PokeApiClient) -> Result<Outcome> {
    if args.is_empty() {
        return Err(PokedexError::MissingArgument("location area name"));
    }
    let area_name = args.join("-");

    println!("Exploring {}...", area_name);
    let area = client.location_area(&area_name).await?;

    println!("Found Pokemon:");
    for encounter in &area.pokemon_encounters {
        println!(" - {}", encounter.pokemon.name);
    }
    Ok(Outcome::Continue)
}
