//! Key bindings and cursor movement.

use aula_tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at a square chosen by digit.
    Place(Position),
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Play at the cursor.
    PlaceAtCursor,
    /// Clear the board.
    Reset,
    /// Zero the scores.
    ResetScores,
    /// Off → easy → medium → hard → off.
    CycleDifficulty,
    /// Sound on/off.
    ToggleSound,
    /// Leave.
    Quit,
}

/// Maps a key press to an [`Action`].
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            Position::parse_key_or_label(&c.to_string()).map(Action::Place)
        }
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::Cursor(code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('z') => Some(Action::ResetScores),
        KeyCode::Char('d') => Some(Action::CycleDifficulty),
        KeyCode::Char('s') => Some(Action::ToggleSound),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys; the edges stop it.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Right if col < 2 => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
