//! Saved match state and game history.

use crate::storage::{BlobStore, FileStore, MemoryStore, StorageError};
use aula_tictactoe::{Difficulty, Outcome, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Store key for [`SavedState`].
pub const STATE_KEY: &str = "tictactoe";

/// Store key for the history list.
pub const HISTORY_KEY: &str = "tictactoe_history";

/// Most history entries kept; older ones are dropped.
pub const HISTORY_CAP: usize = 50;

/// Wins per mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Wins by X.
    #[serde(default)]
    pub x: u32,
    /// Wins by O.
    #[serde(default)]
    pub o: u32,
}

impl Scores {
    /// Wins credited to `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Credits a win to `player`.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

/// Display names per mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name shown for X.
    #[serde(default = "default_x_name")]
    pub x: String,
    /// Name shown for O.
    #[serde(default = "default_o_name")]
    pub o: String,
}

fn default_x_name() -> String {
    PlayerNames::default_for(Player::X)
}

fn default_o_name() -> String {
    PlayerNames::default_for(Player::O)
}

impl PlayerNames {
    /// The name a mark gets when nobody chose one.
    pub fn default_for(player: Player) -> String {
        format!("Player {}", player)
    }

    /// Name shown for `player`.
    pub fn get(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Renames `player`. Blank names fall back to the default.
    pub fn set(&mut self, player: Player, name: &str) {
        let name = match name.trim() {
            "" => Self::default_for(player),
            trimmed => trimmed.to_string(),
        };
        match player {
            Player::X => self.x = name,
            Player::O => self.o = name,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: default_x_name(),
            o: default_o_name(),
        }
    }
}

/// Who controls O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two people share the keyboard.
    #[default]
    TwoPlayer,
    /// O is the computer.
    VsAi,
}

/// Everything persisted between sessions except history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Win counters.
    #[serde(default)]
    pub scores: Scores,
    /// Player display names.
    #[serde(default)]
    pub player_names: PlayerNames,
    /// Two-player or against the computer.
    #[serde(default)]
    pub mode: GameMode,
    /// Last chosen difficulty, kept even in two-player mode.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Whether sound effects are on.
    #[serde(default = "default_sound")]
    pub sound: bool,
    /// Finished games since the last score reset.
    #[serde(default)]
    pub games_played: u32,
    /// When this state was written.
    #[serde(default = "Utc::now")]
    pub last_saved: DateTime<Utc>,
}

fn default_sound() -> bool {
    true
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            scores: Scores::default(),
            player_names: PlayerNames::default(),
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            sound: default_sound(),
            games_played: 0,
            last_saved: Utc::now(),
        }
    }
}

/// How a recorded game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameResult {
    /// Someone completed a line.
    Win,
    /// Board filled without a line.
    Tie,
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the epoch at the time of recording.
    pub id: i64,
    /// When the game ended.
    pub date: DateTime<Utc>,
    /// Win or tie.
    pub result: GameResult,
    /// The winning mark, if any.
    pub winner: Option<Player>,
    /// Names at the time the game ended.
    pub player_names: PlayerNames,
    /// Mode the game was played in.
    pub mode: GameMode,
    /// Marks on the board at the end.
    pub moves_count: usize,
}

impl HistoryEntry {
    /// Builds an entry for a game that ended with `outcome` at `date`.
    pub fn new(
        outcome: Outcome,
        player_names: PlayerNames,
        mode: GameMode,
        moves_count: usize,
        date: DateTime<Utc>,
    ) -> Self {
        let result = if outcome.is_draw() {
            GameResult::Tie
        } else {
            GameResult::Win
        };
        Self {
            id: date.timestamp_millis(),
            date,
            result,
            winner: outcome.winner(),
            player_names,
            mode,
            moves_count,
        }
    }

    /// Name of the winner, if there was one.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|player| self.player_names.get(player))
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = match self.winner_name() {
            Some(name) => format!("{} won", name),
            None => "Tie".to_string(),
        };
        write!(
            f,
            "{}  {} vs {}  {} moves  {}",
            self.date.format("%Y-%m-%d %H:%M"),
            self.player_names.x,
            self.player_names.o,
            self.moves_count,
            result
        )
    }
}

/// Typed access to saved state and history over a [`BlobStore`].
pub struct Records {
    store: Box<dyn BlobStore>,
}

impl Records {
    /// Wraps an arbitrary store.
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Files under `dir`.
    pub fn on_disk(dir: impl AsRef<Path>) -> Self {
        Self::new(Box::new(FileStore::new(dir.as_ref())))
    }

    /// Nothing survives the process.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Reads the saved state.
    ///
    /// `Ok(None)` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read or holds something that is not a
    /// saved state.
    #[instrument(skip(self))]
    pub fn load_state(&self) -> Result<Option<SavedState>, StorageError> {
        self.read(STATE_KEY)
    }

    /// Writes `state`.
    ///
    /// # Errors
    ///
    /// Fails if the store rejects the write.
    #[instrument(skip(self, state), fields(games_played = state.games_played))]
    pub fn save_state(&self, state: &SavedState) -> Result<(), StorageError> {
        self.write(STATE_KEY, state)
    }

    /// Forgets the saved state.
    ///
    /// # Errors
    ///
    /// Fails if the store rejects the removal.
    pub fn clear_state(&self) -> Result<(), StorageError> {
        self.store.remove(STATE_KEY)
    }

    /// History, newest first.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read or the history is corrupt.
    #[instrument(skip(self))]
    pub fn history(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        Ok(self.read(HISTORY_KEY)?.unwrap_or_default())
    }

    /// Adds `entry` to the front of the history, dropping the oldest
    /// entries beyond [`HISTORY_CAP`].
    ///
    /// A corrupt history is replaced rather than blocking new entries.
    ///
    /// # Errors
    ///
    /// Fails if the store rejects the write.
    #[instrument(skip(self, entry), fields(id = entry.id, result = %entry.result))]
    pub fn push_history(&self, entry: HistoryEntry) -> Result<(), StorageError> {
        let mut history = self.history().unwrap_or_else(|e| {
            warn!(error = %e, "Discarding unreadable history");
            Vec::new()
        });
        history.insert(0, entry);
        history.truncate(HISTORY_CAP);
        debug!(len = history.len(), "History updated");
        self.write(HISTORY_KEY, &history)
    }

    /// Deletes all history.
    ///
    /// # Errors
    ///
    /// Fails if the store rejects the removal.
    #[instrument(skip(self))]
    pub fn clear_history(&self) -> Result<(), StorageError> {
        self.store.remove(HISTORY_KEY)
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(bytes) = self.store.load(key)? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StorageError::new(format!("Corrupt {} record: {}", key, e)))
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| StorageError::new(format!("Failed to encode {}: {}", key, e)))?;
        self.store.save(key, &bytes)
    }
}
