//! Interactive REPL
//!
//! Reads commands from stdin, normalizes them, and dispatches against the
//! command table until the user exits or input ends.

mod commands;

pub use commands::{dispatch, CommandSpec, Outcome, COMMANDS};

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::api::PokeApiClient;

// == Repl State ==
/// Pagination cursor threaded through the `map`/`mapb` commands.
#[derive(Debug, Default)]
pub struct ReplState {
    /// URL of the next location-area page, if one has been seen
    pub next: Option<String>,
    /// URL of the previous location-area page, if one exists
    pub previous: Option<String>,
}

// == Input Normalization ==
/// Normalizes raw input into lowercase, whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// == Loop ==
/// Runs the read-dispatch loop until `exit` or end of input.
///
/// Command errors are printed and the loop continues; only I/O failures on
/// stdin abort it.
pub async fn run(client: &PokeApiClient) -> anyhow::Result<()> {
    let mut state = ReplState::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed, leaving repl");
            break;
        };

        let words = clean_input(&line);
        let Some(name) = words.first() else {
            continue;
        };

        match dispatch(name, &words[1..], &mut state, client).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
