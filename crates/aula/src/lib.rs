//! Aula: tic-tac-toe against a minimax opponent, classic sorting
//! algorithms and two REST catalogue lookups, behind one CLI.
//!
//! The library half holds everything the binary wires together:
//!
//! - [`config`]: TOML configuration
//! - [`storage`] and [`records`]: persisted scores, settings and history
//! - [`sound`]: sound effects as an injected capability
//! - [`session`]: the match state machine driven by the terminal UI
//! - [`commands`]: the non-interactive subcommands
//! - [`tui`]: the interactive board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod records;
pub mod session;
pub mod sound;
pub mod storage;
pub mod tui;

pub use config::{AppConfig, ConfigError, ThinkingDelay};
pub use records::{GameMode, GameResult, HistoryEntry, PlayerNames, Records, SavedState, Scores};
pub use session::Match;
pub use sound::{SoundBackend, SoundEvent, SoundSink};
pub use storage::{BlobStore, FileStore, MemoryStore, StorageError};
