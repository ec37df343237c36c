//! Difficulty levels for the computer opponent.

use serde::{Deserialize, Serialize};

/// How hard the computer opponent plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Mostly random moves.
    Easy,
    /// Occasionally random, shallow search.
    #[default]
    Medium,
    /// Never random; deep search.
    Hard,
}

/// Search parameters derived from a [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Probability in `[0, 1]` of playing a uniformly random legal move.
    pub random_chance: f64,
    /// Plies searched below each candidate move.
    pub depth: u8,
}

impl Difficulty {
    /// Returns the search parameters for this level.
    pub fn params(self) -> SearchParams {
        match self {
            Difficulty::Easy => SearchParams {
                random_chance: 0.7,
                depth: 1,
            },
            Difficulty::Medium => SearchParams {
                random_chance: 0.3,
                depth: 3,
            },
            Difficulty::Hard => SearchParams {
                random_chance: 0.0,
                depth: 6,
            },
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
