//! Behavioural tests for the computer opponent.

use aula_tictactoe::rules::check_winner;
use aula_tictactoe::{
    Board, Decision, Difficulty, Game, GameStatus, Opponent, Player, Position, best_move,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const HARD_DEPTH: u8 = 6;

/// Plays every possible human line against a hard opponent and asserts the
/// opponent never loses.
fn explore(game: &Game, ai: Player, games: &mut usize) {
    if game.is_over() {
        *games += 1;
        assert_ne!(
            game.status(),
            GameStatus::Won(ai.opponent()),
            "hard opponent lost:\n{}",
            game.board().display()
        );
        return;
    }

    if game.to_move() == ai {
        let pos = best_move(game.board(), ai, HARD_DEPTH).expect("moves remain");
        let mut next = game.clone();
        next.try_place(pos).expect("search returns an empty square");
        explore(&next, ai, games);
    } else {
        for pos in game.valid_moves() {
            let mut next = game.clone();
            next.try_place(pos).expect("valid move");
            explore(&next, ai, games);
        }
    }
}

#[test]
fn test_hard_never_loses_moving_second() {
    let mut games = 0;
    explore(&Game::new(), Player::O, &mut games);
    assert!(games > 0);
}

#[test]
fn test_hard_never_loses_moving_first() {
    let mut games = 0;
    explore(&Game::new(), Player::X, &mut games);
    assert!(games > 0);
}

#[test]
fn test_hard_blocks_open_line() {
    let board: Board = "XX./.O./...".parse().unwrap();
    let opponent = Opponent::new(Player::O, Difficulty::Hard);
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(
        opponent.decide(&board, &mut rng),
        Some(Decision::Searched(Position::TopRight))
    );
}

#[test]
fn test_hard_prefers_own_win_to_block() {
    let board: Board = "XX./OO./..X".parse().unwrap();
    let opponent = Opponent::new(Player::O, Difficulty::Hard);
    let mut rng = StdRng::seed_from_u64(11);
    let pos = opponent.choose_move(&board, &mut rng).unwrap();
    assert_eq!(pos, Position::MiddleRight);
    assert_eq!(check_winner(&board.with(pos, Player::O)), Some(Player::O));
}

fn random_share(difficulty: Difficulty, seed: u64) -> f64 {
    const TRIALS: usize = 2000;
    let board: Board = "X../.O./...".parse().unwrap();
    let opponent = Opponent::new(Player::X, difficulty);
    let mut rng = StdRng::seed_from_u64(seed);
    let random = (0..TRIALS)
        .filter(|_| {
            opponent
                .decide(&board, &mut rng)
                .expect("board has empty squares")
                .is_random()
        })
        .count();
    random as f64 / TRIALS as f64
}

#[test]
fn test_easy_plays_randomly_about_seventy_percent() {
    let share = random_share(Difficulty::Easy, 42);
    assert!((share - 0.7).abs() < 0.05, "share was {share}");
}

#[test]
fn test_medium_plays_randomly_about_thirty_percent() {
    let share = random_share(Difficulty::Medium, 42);
    assert!((share - 0.3).abs() < 0.05, "share was {share}");
}

#[test]
fn test_decide_does_not_mutate_board() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    let before = board;
    let mut rng = StdRng::seed_from_u64(5);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let opponent = Opponent::new(Player::X, difficulty);
        let pos = opponent.choose_move(&board, &mut rng).unwrap();
        assert!(before.is_empty(pos));
    }
    assert_eq!(board, before);
}
