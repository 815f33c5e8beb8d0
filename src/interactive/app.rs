//! TUI application state and logic

use crate::commands::analyze_root;
use crate::dictionary::WordListDictionary;
use crate::game::{Analysis, Rejection, Round, Session, Statistics};
use crate::output::formatters::{points, rejection_line};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<StdRng>,
    pub dictionary: &'a WordListDictionary,
    pub language: String,
    /// Every word the current root word allows
    pub achievable: Analysis,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

/// A modal error shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<StdRng>, dictionary: &'a WordListDictionary) -> Self {
        let achievable = analyze_root(session.round().root_word(), dictionary);

        let mut app = Self {
            session,
            dictionary,
            language: dictionary.language().to_string(),
            achievable,
            input_buffer: String::new(),
            messages: Vec::new(),
            alert: None,
            input_mode: InputMode::Typing,
            should_quit: false,
        };

        app.add_message(
            "Welcome! Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app.announce_round();
        app
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        self.session.round()
    }

    #[must_use]
    pub fn stats(&self) -> &Statistics {
        self.session.stats()
    }

    /// Submit the typed word
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input, self.dictionary, &self.language) {
            Ok(accepted) => {
                let text = format!(
                    "{} +{} ({} total)",
                    accepted.word.to_uppercase(),
                    points(accepted.score),
                    self.round().score()
                );
                self.add_message(&text, MessageStyle::Success);
            }
            Err(rejection) if rejection.is_silent() => {}
            Err(rejection) => {
                // Keep the word so it can be corrected
                self.input_buffer = input;
                self.show_alert(rejection);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_round();
        self.achievable = analyze_root(self.session.round().root_word(), self.dictionary);
        self.input_buffer.clear();
        self.alert = None;
        self.input_mode = InputMode::Typing;
        self.announce_round();
    }

    fn announce_round(&mut self) {
        let text = format!(
            "Root word {}: {} words possible",
            self.round().root_word().to_uppercase(),
            self.achievable.len()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    fn show_alert(&mut self, rejection: Rejection) {
        self.add_message(&rejection_line(rejection), MessageStyle::Error);
        self.alert = Some(Alert {
            title: rejection.title().to_string(),
            message: rejection.message().to_string(),
        });
        self.input_mode = InputMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
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
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.dismiss_alert(),
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_input();
                }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    let stats = app.stats();
    tracing::info!(
        rounds = stats.rounds_played,
        words = stats.words_accepted,
        best = stats.best_score,
        "session finished"
    );

    Ok(())
}
