//! Subcommands.
//!
//! Each non-interactive command renders its result to a `String`; `main`
//! decides where it goes. `play` only needs its session prepared here. Lookups take a `&dyn Catalog` so tests can swap the network out.

use crate::records::{Records, SavedState};
use crate::session::Match;
use crate::sound::SoundSink;
use crate::storage::StorageError;
use aula_lookup::{Catalog, LookupError};
use aula_sorting::Algorithm;
use aula_sorting::bench::BenchConfig;
use aula_tictactoe::{Difficulty, Player};
use chrono::Utc;
use derive_getters::Getters;
use derive_new::new;
use std::fmt::Write as _;
use tracing::{info, instrument};

/// Looks up a character and renders it.
///
/// # Errors
///
/// Any lookup failure; show [`LookupError::user_message`] to people.
#[instrument(skip(catalog))]
pub async fn character(catalog: &dyn Catalog, query: &str) -> Result<String, LookupError> {
    let found = catalog.character(query).await?;
    info!(id = found.id, "Character found");
    Ok(found.to_string())
}

/// Looks up a creature by name or number and renders it.
///
/// # Errors
///
/// Any lookup failure; show [`LookupError::user_message`] to people.
#[instrument(skip(catalog))]
pub async fn creature(catalog: &dyn Catalog, query: &str) -> Result<String, LookupError> {
    let found = catalog.creature(query).await?;
    info!(id = found.id, "Creature found");
    Ok(found.to_string())
}

/// Options a `play` invocation applies on top of the saved state.
#[derive(Debug, Clone, Default, PartialEq, Eq, new, Getters)]
pub struct PlaySetup {
    difficulty: Option<Difficulty>,
    two_player: bool,
    x_name: Option<String>,
    o_name: Option<String>,
}

/// Loads the saved match and applies `setup` to it.
///
/// Names are applied after the opponent, so `o_name` replaces the
/// computer's default name. Every change is saved.
#[instrument(skip(records, sink))]
pub fn prepare_match(records: Records, sink: Box<dyn SoundSink>, setup: &PlaySetup) -> Match {
    let mut session = Match::load(records, sink);
    if setup.two_player {
        session.set_difficulty(None);
    } else if setup.difficulty.is_some() {
        session.set_difficulty(setup.difficulty);
    }
    if let Some(name) = &setup.x_name {
        session.set_player_name(Player::X, name);
    }
    if let Some(name) = &setup.o_name {
        session.set_player_name(Player::O, name);
    }
    info!(x = %session.names().x, o = %session.names().o, "Match ready");
    session
}

/// A `sort` invocation.
#[derive(Debug, Clone, PartialEq, Eq, new, Getters)]
pub struct SortRequest {
    algorithm: Algorithm,
    values: Vec<i64>,
    steps: bool,
    descending: bool,
}

/// Sorts the requested values and renders the result.
///
/// With `steps`, every recorded step is listed with the slice after it,
/// followed by the operation counts.
#[instrument(skip(request), fields(algorithm = %request.algorithm, len = request.values.len()))]
pub fn sort(request: &SortRequest) -> String {
    let mut values = request.values.clone();
    let descending = request.descending;
    let compare = move |a: &i64, b: &i64| if descending { b.cmp(a) } else { a.cmp(b) };

    if !request.steps {
        request.algorithm.sort_by(&mut values, compare);
        return format!("{:?}", values);
    }

    let trace = request.algorithm.trace_by(&mut values, compare);
    let mut out = format!("start      {:?}\n", trace.initial());
    for (i, event) in trace.events().iter().enumerate() {
        let _ = writeln!(out, "{:>4}  {:<28} {:?}", i + 1, event.step.to_string(), event.snapshot);
    }
    let stats = trace.stats();
    let _ = writeln!(out, "result     {:?}", trace.final_state());
    let _ = write!(
        out,
        "{} comparisons, {} swaps, {} shifts, {} passes",
        stats.comparisons, stats.swaps, stats.shifts, stats.passes
    );
    out
}

/// Runs the benchmark and renders it as a table or JSON.
///
/// # Errors
///
/// Only if the report cannot be encoded as JSON.
pub fn bench(config: &BenchConfig, json: bool) -> Result<String, serde_json::Error> {
    let report = aula_sorting::bench::run(config);
    if json {
        serde_json::to_string_pretty(&report)
    } else {
        Ok(report.table())
    }
}

/// Lists stored games, newest first, or clears them.
///
/// # Errors
///
/// Fails if the history cannot be read or removed.
#[instrument(skip(records))]
pub fn history(records: &Records, clear: bool) -> Result<String, StorageError> {
    if clear {
        records.clear_history()?;
        return Ok("History cleared.".to_string());
    }

    let entries = records.history()?;
    if entries.is_empty() {
        return Ok("No games played yet.".to_string());
    }
    Ok(entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Shows the saved scores, optionally zeroing them first.
///
/// # Errors
///
/// Fails if the saved state cannot be read or written.
#[instrument(skip(records))]
pub fn scores(records: &Records, reset: bool) -> Result<String, StorageError> {
    let mut state = records.load_state()?.unwrap_or_default();
    if reset {
        state.scores = Default::default();
        state.games_played = 0;
        state.last_saved = Utc::now();
        records.save_state(&state)?;
    }
    Ok(render_scores(&state))
}

fn render_scores(state: &SavedState) -> String {
    format!(
        "{}: {}\n{}: {}\nGames played: {}",
        state.player_names.x,
        state.scores.x,
        state.player_names.o,
        state.scores.o,
        state.games_played
    )
}
