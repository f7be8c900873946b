//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the daily game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{HintKind, LetterState, WORD_LENGTH};
use crate::game::MAX_GUESSES;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(10), // Input area / end plate
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    match app.input_mode {
        InputMode::Typing => render_input(f, app, chunks[2]),
        InputMode::GameOver => render_end_plate(f, app, chunks[2]),
    }

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("NICKLE - {}", app.game.config().date))
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

fn hint_style(hint: HintKind) -> Style {
    let bg = match hint {
        HintKind::Correct => Color::Green,
        HintKind::Present => Color::Yellow,
        HintKind::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn key_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterState::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => Style::new().fg(Color::DarkGray),
        LetterState::Unknown => Style::new().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.game.session;
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in session.rows() {
        let spans: Vec<Span> = row
            .word
            .text()
            .chars()
            .zip(row.feedback.hints())
            .flat_map(|(letter, &hint)| {
                [
                    Span::styled(format!(" {letter} "), hint_style(hint)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let mut remaining = MAX_GUESSES.saturating_sub(session.guess_count());
    if app.input_mode == InputMode::Typing && remaining > 0 {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let tile = typed
                    .get(i)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                [
                    Span::styled(
                        tile,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
        remaining -= 1;
    }

    for _ in 0..remaining {
        lines.push(Line::styled(
            " _   _   _   _   _ ",
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.game.session.letter_states();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(format!(" {letter} "), key_style(states.get(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
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
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Type a guess | Enter to submit | Backspace to delete ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_end_plate(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app.end_plate().into_iter().map(Line::from).collect();
    let color = if app.game.session.status() == crate::game::GameStatus::Won {
        Color::Green
    } else {
        Color::Red
    };

    let plate = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Game over | q to quit ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(plate, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.game.session;
    let text = format!(
        "Player: {} | Guess {}/{MAX_GUESSES} | Esc: Quit",
        app.game.player_name(),
        session.guess_count().min(MAX_GUESSES),
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
