//! Terminal UI for playing a match.

mod app;
mod input;
mod ui;

use crate::config::ThinkingDelay;
use crate::session::Match;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the match until the user quits, then restores the terminal.
pub async fn run_tui(session: Match, thinking: ThinkingDelay) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(session);
    let res = run_loop(&mut terminal, &mut app, thinking).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(games_played = app.session().games_played(), "Terminal UI closed");
    res
}

#[instrument(skip_all)]
async fn run_loop(terminal: &mut Term, app: &mut App, thinking: ThinkingDelay) -> Result<()> {
    let mut rng = StdRng::from_os_rng();

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.session().is_ai_pending() {
            app.session_mut().ai_turn(thinking, &mut rng).await;
            // Keys pressed while the computer was thinking do not count.
            let mut dropped = 0;
            while event::poll(Duration::ZERO)? {
                event::read()?;
                dropped += 1;
            }
            if dropped > 0 {
                debug!(dropped, "Discarded input queued during computer turn");
            }
            continue;
        }

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
