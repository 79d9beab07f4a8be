//! TUI rendering with ratatui
//!
//! Gallows, word, and guess panels for the hangman interface.

use super::app::{App, InputMode, MESSAGE_HISTORY, MessageStyle};
use crate::core::Outcome;
use crate::output::formatters::{format_wrong_guesses, gallows, gallows_stage, spaced_mask};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let stage = gallows_stage(game.wrong_guesses().len(), game.max_attempts());

    let figure_color = if stage >= 5 { Color::Red } else { Color::White };
    let mut lines: Vec<Line> = gallows(stage)
        .into_iter()
        .map(|row| Line::styled(row, Style::default().fg(figure_color)))
        .collect();

    // Reveal the whole word once the round is lost
    let word = match app.input_mode {
        InputMode::GameOver(Outcome::Lost) => game
            .secret()
            .text()
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" "),
        _ => spaced_mask(game),
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        word.to_uppercase(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(alphabet_line(app));

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

/// Alphabet row: revealed letters green, wrong letters red, untried dim
fn alphabet_line(app: &App) -> Line<'static> {
    let revealed = app.game.revealed_letters();
    let wrong = app.game.wrong_guesses();

    let spans: Vec<Span> = (b'a'..=b'z')
        .map(|letter| {
            let style = if revealed.contains(&letter) {
                Style::default().fg(Color::Green)
            } else if wrong.contains(&letter) {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{} ", (letter as char).to_ascii_uppercase()), style)
        })
        .collect();

    Line::from(spans)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(3), // Wrong guesses
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_wrong_guesses(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let left = app.game.attempts_left();
    let max = app.game.max_attempts();
    let percent = (left * 100 / max.max(1)) as u16;

    let color = match left {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{max}"));

    f.render_widget(gauge, area);
}

fn render_wrong_guesses(f: &mut Frame, app: &App, area: Rect) {
    let wrong = Paragraph::new(format_wrong_guesses(app.game.wrong_guesses()).to_uppercase())
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title(" Wrong Guesses ")
                .borders(Borders::ALL),
        );
    f.render_widget(wrong, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(MESSAGE_HISTORY)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Guess ",
            "Type a letter (A-Z)",
            Color::Yellow,
        ),
        InputMode::GameOver(Outcome::Won) => (
            " 🎉 YOU WIN! 🎉 ",
            "Play again? (y/n)",
            Color::Green,
        ),
        InputMode::GameOver(Outcome::Lost) => (
            " 💀 GAME OVER ",
            "Play again? (y/n)",
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let word_text = format!("Word: {} letters", app.game.secret().letter_count());
    let word = Paragraph::new(word_text).alignment(Alignment::Center);
    f.render_widget(word, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc / Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
