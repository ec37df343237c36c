//! Aula - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use aula::cli::{Cli, Command};
use aula::commands::{self, PlaySetup, SortRequest};
use aula::{AppConfig, Records, logging, tui};
use aula_lookup::LookupClient;
use aula_sorting::bench::BenchConfig;
use clap::Parser;
use std::process::ExitCode;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            difficulty,
            two_player,
            x_name,
            o_name,
        } => {
            let setup = PlaySetup::new(difficulty, two_player, x_name, o_name);
            run_play(&config, &setup).await
        }
        Command::Character { name } => run_lookup(&config, Lookup::Character, &name).await,
        Command::Creature { name } => run_lookup(&config, Lookup::Creature, &name).await,
        Command::Sort {
            algorithm,
            values,
            steps,
            descending,
        } => {
            logging::init_console();
            let request = SortRequest::new(algorithm, values, steps, descending);
            println!("{}", commands::sort(&request));
            Ok(ExitCode::SUCCESS)
        }
        Command::Bench {
            sizes,
            seed,
            shape,
            algorithms,
            json,
        } => {
            logging::init_console();
            let defaults = BenchConfig::default();
            let bench = BenchConfig {
                sizes: if sizes.is_empty() {
                    config.bench_sizes().clone()
                } else {
                    sizes
                },
                seed,
                shape,
                algorithms: if algorithms.is_empty() {
                    defaults.algorithms
                } else {
                    algorithms
                },
                ..defaults
            };
            println!("{}", commands::bench(&bench, json)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::History { clear } => {
            logging::init_console();
            let records = Records::on_disk(config.data_dir());
            println!("{}", commands::history(&records, clear)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Scores { reset } => {
            logging::init_console();
            let records = Records::on_disk(config.data_dir());
            println!("{}", commands::scores(&records, reset)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Lookup {
    Character,
    Creature,
}

#[instrument(skip(config))]
async fn run_lookup(config: &AppConfig, lookup: Lookup, name: &str) -> Result<ExitCode> {
    logging::init_console();
    let client = LookupClient::new(config.endpoints().clone())?;

    let result = match lookup {
        Lookup::Character => commands::character(&client, name).await,
        Lookup::Creature => commands::creature(&client, name).await,
    };
    match result {
        Ok(text) => {
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_play(config: &AppConfig, setup: &PlaySetup) -> Result<ExitCode> {
    logging::init_file(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    info!(data_dir = %config.data_dir().display(), "Starting match");

    let records = Records::on_disk(config.data_dir());
    let session = commands::prepare_match(records, config.sound().sink(), setup);

    tui::run_tui(session, *config.thinking()).await?;
    Ok(ExitCode::SUCCESS)
}
