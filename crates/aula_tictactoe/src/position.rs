//! Named board positions.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine squares, numbered 0-8 row by row.
///
/// The on-screen keypad numbers them 1-9 in the same order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[allow(missing_docs)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Every square in index order.
    pub const ALL: [Position; 9] = {
        use Position::*;
        [
            TopLeft,
            TopCenter,
            TopRight,
            MiddleLeft,
            Center,
            MiddleRight,
            BottomLeft,
            BottomCenter,
            BottomRight,
        ]
    };

    const LABELS: [&'static str; 9] = [
        "Top-left",
        "Top-center",
        "Top-right",
        "Middle-left",
        "Center",
        "Middle-right",
        "Bottom-left",
        "Bottom-center",
        "Bottom-right",
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        Self::LABELS[self.to_index()]
    }

    /// Parses a 1-based keypad digit or a label.
    ///
    /// Digits follow the on-screen legend (1 = top-left, 9 = bottom-right).
    /// Labels match case-insensitively.
    #[instrument]
    pub fn parse_key_or_label(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        Self::ALL
            .into_iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
    }

    /// Row-major index, 0-8.
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// The square at `index`, if it is one.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Empty squares of `board`, in index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL.into_iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_key_or_label() {
        assert_eq!(Position::parse_key_or_label("1"), Some(Position::TopLeft));
        assert_eq!(Position::parse_key_or_label(" 9 "), Some(Position::BottomRight));
        assert_eq!(Position::parse_key_or_label("0"), None);
        assert_eq!(Position::parse_key_or_label("10"), None);
        assert_eq!(Position::parse_key_or_label("center"), Some(Position::Center));
        assert_eq!(Position::parse_key_or_label("nowhere"), None);
    }
}
