//! Stateless rendering of the match.

use super::app::App;
use crate::records::GameMode;
use aula_tictactoe::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "1-9/arrows+Enter move  r reset  z scores  d difficulty  s sound  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Aula - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = match app.notice() {
        Some(notice) => format!("{}  ·  {}", app.session().status_line(), notice),
        None => app.session().status_line(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let names = session.names();
    let scores = session.scores();
    let mode = match (session.mode(), session.difficulty()) {
        (GameMode::VsAi, Some(level)) => format!("vs AI ({})", level.label()),
        _ => "two players".to_string(),
    };
    let sound = if session.sound_enabled() { "on" } else { "off" };

    let line = Line::from(vec![
        Span::styled(format!("{} {}", names.x, scores.x), mark_style(Player::X)),
        Span::raw("  :  "),
        Span::styled(format!("{} {}", scores.o, names.o), mark_style(Player::O)),
        Span::styled(
            format!("   games {}  {}  sound {}", session.games_played(), mode, sound),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let scores = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scores, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let winning = app.session().game().winning_line();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, chunk, winning.as_ref());
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position], winning: Option<&[Position; 3]>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        if i > 0 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[i * 2 - 1]);
        }
        let in_line = winning.is_some_and(|line| line.contains(pos));
        draw_cell(frame, cols[i * 2], app, *pos, in_line);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, in_line: bool) {
    let (symbol, base_style) = match app.session().game().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (player.to_string(), mark_style(player)),
    };

    let style = if in_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !app.session().game().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Records;
    use crate::session::Match;
    use crate::sound::Silent;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_screen_shows_names_and_status() {
        let app = App::new(Match::load(Records::in_memory(), Box::new(Silent)));
        let text = screen(&app);
        assert!(text.contains("Player X 0"));
        assert!(text.contains("Player X's turn (X)"));
    }
}
