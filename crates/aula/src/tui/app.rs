//! Application state and key handling.

use super::input::{Action, action_for, move_cursor};
use crate::session::Match;
use aula_tictactoe::Position;
use crossterm::event::KeyEvent;
use tracing::debug;

/// Main application state.
pub struct App {
    session: Match,
    cursor: Position,
    notice: Option<String>,
    quit: bool,
}

impl App {
    /// Creates a new application around `session`.
    pub fn new(session: Match) -> Self {
        Self {
            session,
            cursor: Position::Center,
            notice: None,
            quit: false,
        }
    }

    /// The match being played.
    pub fn session(&self) -> &Match {
        &self.session
    }

    /// Mutable access for the AI turn.
    pub fn session_mut(&mut self) -> &mut Match {
        &mut self.session
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// One-off message from the last settings change.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = action_for(key) else {
            return;
        };
        debug!(?action, "Key action");
        self.notice = None;

        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                self.session.handle_cell(pos);
            }
            Action::Cursor(code) => {
                let next = move_cursor(self.cursor, code);
                if next != self.cursor {
                    self.cursor = next;
                    self.session.hover(next);
                }
            }
            Action::PlaceAtCursor => {
                self.session.handle_cell(self.cursor);
            }
            Action::Reset => self.session.reset(),
            Action::ResetScores => {
                self.session.reset_scores();
                self.notice = Some("Scores reset".to_string());
            }
            Action::CycleDifficulty => {
                let notice = match self.session.cycle_difficulty() {
                    Some(level) => format!("Playing the computer ({})", level.label()),
                    None => "Two-player mode".to_string(),
                };
                self.notice = Some(notice);
            }
            Action::ToggleSound => {
                let on = self.session.toggle_sound();
                self.notice = Some(format!("Sound {}", if on { "on" } else { "off" }));
            }
            Action::Quit => self.quit = true,
        }
    }
}
