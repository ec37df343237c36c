//! Command-line interface for aula.

use aula_sorting::Algorithm;
use aula_sorting::bench::InputShape;
use aula_tictactoe::Difficulty;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aula - tic-tac-toe, sorting and catalogue lookups from the terminal
#[derive(Parser, Debug)]
#[command(name = "aula")]
#[command(about = "Tic-tac-toe, sorting and catalogue lookups", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./aula.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe in the terminal
    Play {
        /// Play the computer at this level
        #[arg(short, long, conflicts_with = "two_player")]
        difficulty: Option<Difficulty>,

        /// Two players share the keyboard
        #[arg(long)]
        two_player: bool,

        /// Name shown for X (blank restores the default)
        #[arg(long)]
        x_name: Option<String>,

        /// Name shown for O (blank restores the default)
        #[arg(long)]
        o_name: Option<String>,
    },

    /// Look up a character by name
    Character {
        /// Character name
        name: String,
    },

    /// Look up a creature by name or number
    Creature {
        /// Creature name or national number
        name: String,
    },

    /// Sort numbers with one of the classic algorithms
    Sort {
        /// Algorithm, e.g. bubble, bubble-optimized, insertion, quick, selection
        algorithm: Algorithm,

        /// Values to sort
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Print every step
        #[arg(long)]
        steps: bool,

        /// Sort largest first
        #[arg(long)]
        descending: bool,
    },

    /// Time every algorithm on generated input
    Bench {
        /// Input sizes, comma separated (defaults to the configured sizes)
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<usize>,

        /// Seed for the input generator
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Input shape: random, sorted, reversed, nearly-sorted
        #[arg(long, default_value = "random")]
        shape: InputShape,

        /// Only run these algorithms (repeatable)
        #[arg(short, long = "algorithm")]
        algorithms: Vec<Algorithm>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show finished games, newest first
    History {
        /// Delete the history instead
        #[arg(long)]
        clear: bool,
    },

    /// Show saved scores
    Scores {
        /// Zero the scores instead
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        let cli = Cli::parse_from(["aula", "sort", "quick", "3", "-1", "2", "--descending"]);
        match cli.command {
            Command::Sort {
                algorithm,
                values,
                steps,
                descending,
            } => {
                assert_eq!(algorithm, Algorithm::Quick);
                assert_eq!(values, vec![3, -1, 2]);
                assert!(!steps);
                assert!(descending);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bench_sizes() {
        let cli = Cli::parse_from(["aula", "bench", "--sizes", "10,20", "--json"]);
        match cli.command {
            Command::Bench { sizes, json, seed, .. } => {
                assert_eq!(sizes, vec![10, 20]);
                assert!(json);
                assert_eq!(seed, 42);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_play_names() {
        let cli = Cli::parse_from(["aula", "play", "--two-player", "--x-name", "Ada", "--o-name", ""]);
        match cli.command {
            Command::Play {
                difficulty,
                two_player,
                x_name,
                o_name,
            } => {
                assert_eq!(difficulty, None);
                assert!(two_player);
                assert_eq!(x_name.as_deref(), Some("Ada"));
                assert_eq!(o_name.as_deref(), Some(""));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["aula", "history", "--config", "other.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
    }
}
