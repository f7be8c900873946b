//! TUI application state and logic

use crate::commands::DailyGame;
use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, RestoreOutcome};
use crate::output::formatters::score_label;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: DailyGame<'a>,
    /// Letters typed for the next guess
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: DailyGame<'a>) -> Self {
        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Typing,
        };

        app.add_message(
            "Guess the five-letter word. Enter submits, Esc quits.",
            MessageStyle::Info,
        );
        match app.game.restore.clone() {
            RestoreOutcome::Resumed { guesses } => {
                let text = format!("Resumed today's game after {guesses} guesses");
                app.add_message(&text, MessageStyle::Info);
            }
            RestoreOutcome::Discarded(_) => {
                app.add_message(
                    "Saved game could not be restored, starting over",
                    MessageStyle::Error,
                );
            }
            RestoreOutcome::Fresh => {}
        }
        app.sync_mode();
        app
    }

    /// Append a letter if the row has room and the letter is not ruled out
    pub fn type_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        if self.input_buffer.len() >= WORD_LENGTH {
            return;
        }
        if !self.game.session.can_type_letter(letter) {
            return;
        }
        self.input_buffer.push(letter);
    }

    pub fn delete_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed row
    ///
    /// Rejected guesses stay in the buffer so they can be corrected.
    pub fn submit(&mut self) {
        if self.input_buffer.len() < WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let guess = self.input_buffer.clone();
        match self.game.submit(&guess) {
            Ok(outcome) => {
                self.input_buffer.clear();
                match outcome.status {
                    GameStatus::Won => {
                        let celebration = match self.game.session.guess_count() {
                            1 => "🎯 Hole in one!",
                            2 => "🔥 Magnificent!",
                            3 => "✨ Splendid!",
                            4 => "👏 Great job!",
                            5 => "🎉 Nice work!",
                            _ => "😅 Phew!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                    }
                    GameStatus::Lost => {
                        let text = format!("The word was {}", self.game.session.target().text());
                        self.add_message(&text, MessageStyle::Error);
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.sync_mode();
    }

    fn sync_mode(&mut self) {
        if self.game.session.status().is_over() {
            self.input_mode = InputMode::GameOver;
        }
    }

    /// End-of-game lines: result, score and share text when allowed
    #[must_use]
    pub fn end_plate(&self) -> Vec<String> {
        let session = &self.game.session;
        let headline = match session.status() {
            GameStatus::Won => "Congratulations",
            GameStatus::Lost => "Unlucky",
            GameStatus::InProgress => return Vec::new(),
        };

        let mut lines = vec![
            headline.to_string(),
            format!("The word was {} ({})", session.target().text(), score_label(session)),
            String::new(),
        ];
        if self.game.is_shareable() {
            lines.extend(self.game.share_text().lines().map(str::to_string));
        } else {
            lines.push("Play today's game to share a result".to_string());
        }
        lines
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => {
                if matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc | KeyCode::Enter) {
                    self.should_quit = true;
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => self.delete_letter(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Returns the share text of a finished, shareable game
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    let finished = app.game.session.status().is_over() && app.game.is_shareable();
    Ok(finished.then(|| app.game.share_text()))
}
