//! A tic-tac-toe match: the game plus everything around it.
//!
//! [`Match`] owns the board, scores, names, mode, the computer opponent and
//! the injected storage and sound capabilities. Front ends call into it and
//! render what it exposes; there is no other game state.
//!
//! The computer always plays O, and X always opens. After a human move
//! that hands the turn to the computer, [`Match::is_ai_pending`] is true
//! and cell input is ignored until [`Match::ai_move`] (or
//! [`Match::ai_turn`], which waits first) plays the reply.

use crate::config::ThinkingDelay;
use crate::records::{GameMode, HistoryEntry, PlayerNames, Records, SavedState, Scores};
use crate::sound::{SoundEvent, SoundSink};
use crate::storage::StorageError;
use aula_tictactoe::{Difficulty, Game, GameStatus, Opponent, Outcome, Player, Position};
use chrono::Utc;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Mark played by the computer.
pub const AI_MARK: Player = Player::O;

/// One running match.
pub struct Match {
    game: Game,
    mode: GameMode,
    opponent: Opponent,
    scores: Scores,
    names: PlayerNames,
    sound_on: bool,
    games_played: u32,
    ai_pending: bool,
    records: Records,
    sink: Box<dyn SoundSink>,
}

impl Match {
    /// Starts a match from whatever `records` holds.
    ///
    /// Missing state starts fresh. Unreadable state is logged and replaced
    /// by defaults; the next save overwrites it.
    #[instrument(skip_all)]
    pub fn load(records: Records, sink: Box<dyn SoundSink>) -> Self {
        let state = match records.load_state() {
            Ok(Some(state)) => {
                info!(games_played = state.games_played, mode = %state.mode, "Restored saved match");
                state
            }
            Ok(None) => {
                debug!("No saved match, starting fresh");
                SavedState::default()
            }
            Err(e) => {
                warn!(error = %e, "Saved match unreadable, starting fresh");
                SavedState::default()
            }
        };

        Self {
            game: Game::new(),
            mode: state.mode,
            opponent: Opponent::new(AI_MARK, state.difficulty),
            scores: state.scores,
            names: state.player_names,
            sound_on: state.sound,
            games_played: state.games_played,
            ai_pending: false,
            records,
            sink,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Two-player or against the computer.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The computer's difficulty, or `None` in two-player mode.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.mode {
            GameMode::VsAi => Some(self.opponent.difficulty()),
            GameMode::TwoPlayer => None,
        }
    }

    /// Win counters.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Player names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Whether sound effects are on.
    pub fn sound_enabled(&self) -> bool {
        self.sound_on
    }

    /// Finished games since the last score reset.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// True while the computer owes a move.
    pub fn is_ai_pending(&self) -> bool {
        self.ai_pending
    }

    /// Stored history, newest first.
    ///
    /// # Errors
    ///
    /// Fails if the history cannot be read.
    pub fn history(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        self.records.history()
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Ignored (returning `false`) while the computer is thinking, after
    /// the game has ended, on an occupied square, and on the computer's
    /// turn.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn handle_cell(&mut self, pos: Position) -> bool {
        if self.ai_pending || self.is_ai_turn() {
            debug!("Ignoring input while the computer is to move");
            return false;
        }
        if !self.game.place(pos) {
            return false;
        }

        self.play(SoundEvent::Click);
        self.after_move();
        true
    }

    /// Plays the computer's reply immediately.
    ///
    /// Returns the square played, or `None` if no reply was pending.
    #[instrument(skip(self, rng))]
    pub fn ai_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if !self.ai_pending {
            return None;
        }
        self.ai_pending = false;

        let decision = self.opponent.decide(self.game.board(), rng)?;
        let pos = decision.position();
        if !self.game.place(pos) {
            warn!(position = %pos, "Opponent chose an unplayable square");
            return None;
        }

        info!(position = %pos, random = decision.is_random(), "Computer moved");
        self.play(SoundEvent::Click);
        self.after_move();
        Some(pos)
    }

    /// Waits a random thinking delay, then plays the computer's reply.
    pub async fn ai_turn<R: Rng + ?Sized>(
        &mut self,
        delay: ThinkingDelay,
        rng: &mut R,
    ) -> Option<Position> {
        if !self.ai_pending {
            return None;
        }
        let wait = delay.sample(rng);
        debug!(?wait, "Computer thinking");
        tokio::time::sleep(wait).await;
        self.ai_move(rng)
    }

    /// Clears the board. Scores and history are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.ai_pending = false;
        self.play(SoundEvent::Reset);
        self.save();
    }

    /// Zeroes scores and the games-played counter.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
        self.games_played = 0;
        self.save();
        self.play(SoundEvent::Reset);
    }

    /// Deletes stored history.
    ///
    /// # Errors
    ///
    /// Fails if the store rejects the removal.
    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        self.records.clear_history()?;
        self.play(SoundEvent::Reset);
        Ok(())
    }

    /// Switches between two-player mode (`None`) and playing the computer.
    ///
    /// O is renamed to match and the board is cleared.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        match difficulty {
            None => {
                self.mode = GameMode::TwoPlayer;
                self.names.o = PlayerNames::default_for(AI_MARK);
            }
            Some(level) => {
                self.mode = GameMode::VsAi;
                self.opponent.set_difficulty(level);
                self.names.o = format!("AI ({})", level.label());
            }
        }
        info!(mode = %self.mode, "Opponent changed");
        self.reset();
    }

    /// Steps off → easy → medium → hard → off.
    pub fn cycle_difficulty(&mut self) -> Option<Difficulty> {
        let next = match self.difficulty() {
            None => Some(Difficulty::Easy),
            Some(Difficulty::Easy) => Some(Difficulty::Medium),
            Some(Difficulty::Medium) => Some(Difficulty::Hard),
            Some(Difficulty::Hard) => None,
        };
        self.set_difficulty(next);
        next
    }

    /// Renames `player`; blank names restore the default.
    pub fn set_player_name(&mut self, player: Player, name: &str) {
        self.names.set(player, name);
        self.save();
    }

    /// Turns sound effects on or off.
    pub fn set_sound(&mut self, on: bool) {
        self.sound_on = on;
        self.save();
        self.play(SoundEvent::Click);
    }

    /// Flips sound effects and returns the new setting.
    pub fn toggle_sound(&mut self) -> bool {
        self.set_sound(!self.sound_on);
        self.sound_on
    }

    /// Signals the cursor resting on `pos`; only empty squares in a live
    /// game make a sound.
    pub fn hover(&self, pos: Position) {
        if !self.game.is_over() && !self.ai_pending && self.game.board().is_empty(pos) {
            self.play(SoundEvent::Hover);
        }
    }

    /// One line describing whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        if self.ai_pending {
            return format!("{} is thinking...", self.names.get(AI_MARK));
        }
        match self.game.status() {
            GameStatus::InProgress => {
                let player = self.game.to_move();
                format!("{}'s turn ({})", self.names.get(player), player)
            }
            GameStatus::Won(player) => format!("{} wins!", self.names.get(player)),
            GameStatus::Drawn => "It's a tie!".to_string(),
        }
    }

    fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi && self.game.to_move() == AI_MARK && !self.game.is_over()
    }

    fn after_move(&mut self) {
        if let Some(outcome) = self.game.outcome() {
            self.end_game(outcome);
        } else if self.is_ai_turn() {
            self.ai_pending = true;
        }
    }

    #[instrument(skip(self))]
    fn end_game(&mut self, outcome: Outcome) {
        self.ai_pending = false;
        if let Some(winner) = outcome.winner() {
            self.scores.record_win(winner);
        }

        let sound = match (outcome, self.mode) {
            (Outcome::Draw, _) => SoundEvent::Tie,
            (Outcome::Winner(AI_MARK), GameMode::VsAi) => SoundEvent::Lose,
            (Outcome::Winner(_), _) => SoundEvent::Win,
        };
        self.play(sound);

        let entry = HistoryEntry::new(
            outcome,
            self.names.clone(),
            self.mode,
            self.game.moves_played(),
            Utc::now(),
        );
        if let Err(e) = self.records.push_history(entry) {
            warn!(error = %e, "Failed to record game");
        }

        self.games_played += 1;
        info!(%outcome, games_played = self.games_played, "Game finished");
        self.save();
    }

    fn save(&self) {
        let state = SavedState {
            scores: self.scores,
            player_names: self.names.clone(),
            mode: self.mode,
            difficulty: self.opponent.difficulty(),
            sound: self.sound_on,
            games_played: self.games_played,
            last_saved: Utc::now(),
        };
        if let Err(e) = self.records.save_state(&state) {
            warn!(error = %e, "Failed to save match");
        }
    }

    fn play(&self, event: SoundEvent) {
        if self.sound_on {
            self.sink.play(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::Silent;

    fn fresh() -> Match {
        Match::load(Records::in_memory(), Box::new(Silent))
    }

    #[test]
    fn test_status_line_names_player_to_move() {
        let mut session = fresh();
        assert_eq!(session.status_line(), "Player X's turn (X)");
        session.handle_cell(Position::Center);
        assert_eq!(session.status_line(), "Player O's turn (O)");
    }

    #[test]
    fn test_cycle_difficulty_wraps_to_two_player() {
        let mut session = fresh();
        assert_eq!(session.cycle_difficulty(), Some(Difficulty::Easy));
        assert_eq!(session.names().o, "AI (Easy)");
        assert_eq!(session.cycle_difficulty(), Some(Difficulty::Medium));
        assert_eq!(session.cycle_difficulty(), Some(Difficulty::Hard));
        assert_eq!(session.cycle_difficulty(), None);
        assert_eq!(session.mode(), GameMode::TwoPlayer);
        assert_eq!(session.names().o, "Player O");
    }

    #[test]
    fn test_changing_difficulty_clears_board() {
        let mut session = fresh();
        session.handle_cell(Position::Center);
        session.set_difficulty(Some(Difficulty::Hard));
        assert_eq!(session.game().moves_played(), 0);
        assert!(!session.is_ai_pending());
    }
}
