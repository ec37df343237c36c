//! Match session behaviour: scoring, history, persistence and the
//! computer's turn.

use aula::records::{HISTORY_CAP, STATE_KEY};
use aula::{
    BlobStore, FileStore, GameMode, GameResult, Match, MemoryStore, Records, SoundEvent, SoundSink,
    ThinkingDelay,
};
use aula_tictactoe::{Difficulty, GameStatus, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<SoundEvent>>>);

impl Recorder {
    fn events(&self) -> Vec<SoundEvent> {
        self.0.lock().unwrap().clone()
    }
}

impl SoundSink for Recorder {
    fn play(&self, event: SoundEvent) {
        self.0.lock().unwrap().push(event);
    }
}

/// X takes the top row while O plays the centre and bottom-left.
const X_WINS: [Position; 5] = [
    Position::TopLeft,
    Position::Center,
    Position::TopCenter,
    Position::BottomLeft,
    Position::TopRight,
];

fn play_all(session: &mut Match, moves: &[Position]) {
    for pos in moves {
        assert!(session.handle_cell(*pos), "move at {} rejected", pos);
    }
}

#[test]
fn test_two_player_win_updates_scores_and_history() {
    let sounds = Recorder::default();
    let mut session = Match::load(Records::in_memory(), Box::new(sounds.clone()));

    play_all(&mut session, &X_WINS);

    assert_eq!(session.game().status(), GameStatus::Won(Player::X));
    assert_eq!(session.scores().x, 1);
    assert_eq!(session.scores().o, 0);
    assert_eq!(session.games_played(), 1);
    assert_eq!(session.status_line(), "Player X wins!");
    assert_eq!(sounds.events().last(), Some(&SoundEvent::Win));

    let history = session.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].result, GameResult::Win);
    assert_eq!(history[0].winner, Some(Player::X));
    assert_eq!(history[0].moves_count, 5);
    assert_eq!(history[0].mode, GameMode::TwoPlayer);

    // Finished games take no more input.
    assert!(!session.handle_cell(Position::BottomRight));
}

#[test]
fn test_occupied_square_ignored() {
    let mut session = Match::load(Records::in_memory(), Box::new(Recorder::default()));
    assert!(session.handle_cell(Position::Center));
    assert!(!session.handle_cell(Position::Center));
    assert_eq!(session.game().moves_played(), 1);
}

#[test]
fn test_history_capped_through_session() {
    let mut session = Match::load(Records::in_memory(), Box::new(Recorder::default()));
    for _ in 0..(HISTORY_CAP + 5) {
        play_all(&mut session, &X_WINS);
        session.reset();
    }
    assert_eq!(session.history().unwrap().len(), HISTORY_CAP);
    assert_eq!(session.games_played() as usize, HISTORY_CAP + 5);
    assert_eq!(session.scores().x as usize, HISTORY_CAP + 5);
}

#[test]
fn test_reset_scores() {
    let sounds = Recorder::default();
    let mut session = Match::load(Records::in_memory(), Box::new(sounds.clone()));
    play_all(&mut session, &X_WINS);
    session.reset_scores();
    assert_eq!(session.scores().x, 0);
    assert_eq!(session.games_played(), 0);
    assert_eq!(sounds.events().last(), Some(&SoundEvent::Reset));
    // Scores reset leaves the finished board alone.
    assert!(session.game().is_over());
}

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = Match::load(Records::on_disk(dir.path()), Box::new(Recorder::default()));
        session.set_player_name(Player::X, "Ada");
        session.set_sound(false);
        play_all(&mut session, &X_WINS);
    }

    let session = Match::load(Records::on_disk(dir.path()), Box::new(Recorder::default()));
    assert_eq!(session.names().x, "Ada");
    assert_eq!(session.scores().x, 1);
    assert_eq!(session.games_played(), 1);
    assert!(!session.sound_enabled());
    assert_eq!(session.game().moves_played(), 0);
    assert_eq!(session.history().unwrap()[0].player_names.x, "Ada");
}

#[test]
fn test_difficulty_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = Match::load(Records::on_disk(dir.path()), Box::new(Recorder::default()));
        session.set_difficulty(Some(Difficulty::Hard));
    }
    let session = Match::load(Records::on_disk(dir.path()), Box::new(Recorder::default()));
    assert_eq!(session.mode(), GameMode::VsAi);
    assert_eq!(session.difficulty(), Some(Difficulty::Hard));
    assert_eq!(session.names().o, "AI (Hard)");
}

#[test]
fn test_corrupt_storage_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.save(STATE_KEY, b"{ not json").unwrap();

    let mut session = Match::load(Records::on_disk(dir.path()), Box::new(Recorder::default()));
    assert_eq!(session.scores().x, 0);
    assert_eq!(session.mode(), GameMode::TwoPlayer);
    assert!(session.sound_enabled());

    // The next save replaces the bad record.
    session.reset();
    assert!(Records::on_disk(dir.path()).load_state().unwrap().is_some());
}

#[test]
fn test_sound_off_is_silent() {
    let sounds = Recorder::default();
    let mut session = Match::load(Records::new(Box::new(MemoryStore::new())), Box::new(sounds.clone()));
    session.set_sound(false);
    let before = sounds.events().len();
    play_all(&mut session, &X_WINS);
    session.hover(Position::BottomRight);
    assert_eq!(sounds.events().len(), before);
}

#[test]
fn test_input_ignored_while_computer_thinks() {
    let mut session = Match::load(Records::in_memory(), Box::new(Recorder::default()));
    session.set_difficulty(Some(Difficulty::Hard));

    assert!(session.handle_cell(Position::Center));
    assert!(session.is_ai_pending());
    assert_eq!(session.status_line(), "AI (Hard) is thinking...");
    assert!(!session.handle_cell(Position::TopLeft));
    assert_eq!(session.game().moves_played(), 1);

    let mut rng = StdRng::seed_from_u64(7);
    let reply = session.ai_move(&mut rng).unwrap();
    assert_ne!(reply, Position::Center);
    assert!(!session.is_ai_pending());
    assert_eq!(session.game().moves_played(), 2);
    assert_eq!(session.game().to_move(), Player::X);

    // Nothing is owed now.
    assert_eq!(session.ai_move(&mut rng), None);
}

#[test]
fn test_hard_computer_never_loses_a_session_game() {
    let sounds = Recorder::default();
    let mut session = Match::load(Records::in_memory(), Box::new(sounds.clone()));
    session.set_difficulty(Some(Difficulty::Hard));
    let mut rng = StdRng::seed_from_u64(3);

    while !session.game().is_over() {
        let first_empty = session.game().valid_moves()[0];
        assert!(session.handle_cell(first_empty));
        session.ai_move(&mut rng);
    }

    assert_eq!(session.scores().x, 0);
    let expected = match session.game().status() {
        GameStatus::Won(Player::O) => SoundEvent::Lose,
        _ => SoundEvent::Tie,
    };
    assert_eq!(sounds.events().last(), Some(&expected));
    assert_eq!(session.history().unwrap()[0].mode, GameMode::VsAi);
}

#[tokio::test(start_paused = true)]
async fn test_ai_turn_waits_within_delay() {
    let mut session = Match::load(Records::in_memory(), Box::new(Recorder::default()));
    session.set_difficulty(Some(Difficulty::Medium));
    let mut rng = StdRng::seed_from_u64(11);

    assert_eq!(session.ai_turn(ThinkingDelay::default(), &mut rng).await, None);

    session.handle_cell(Position::TopLeft);
    let start = tokio::time::Instant::now();
    let reply = session.ai_turn(ThinkingDelay::new(500, 1500), &mut rng).await;
    let waited = start.elapsed();

    assert!(reply.is_some());
    assert!(waited >= Duration::from_millis(500), "waited {:?}", waited);
    assert!(waited <= Duration::from_millis(1501), "waited {:?}", waited);
    assert!(!session.is_ai_pending());
}
