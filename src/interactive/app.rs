//! TUI application state and logic

use crate::commands::{AnalysisResult, analyze_root};
use crate::core::Rejection;
use crate::dictionary::WordListOracle;
use crate::session::{GameSession, WordPool};
use crate::validator::WordValidator;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: GameSession<&'a WordListOracle>,
    pub pool: &'a WordPool,
    pub candidates: &'a [&'a str],
    /// Everything findable in the current round
    pub target: Option<AnalysisResult>,
    pub input_buffer: String,
    /// Rejection waiting to be dismissed
    pub alert: Option<Rejection>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
    pub best_score: usize,
}

impl<'a> App<'a> {
    /// Create the app; no round is running until `next_round`
    #[must_use]
    pub fn new(
        validator: WordValidator<&'a WordListOracle>,
        pool: &'a WordPool,
        candidates: &'a [&'a str],
    ) -> Self {
        Self {
            session: GameSession::new(validator),
            pool,
            candidates,
            target: None,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Welcome! Spell words using the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Start a new round, keeping the best score of the one being left
    pub fn next_round(&mut self) {
        if self.session.is_in_round() {
            self.stats.best_score = self.stats.best_score.max(self.session.score());
        }

        let root = self.session.start_round(self.pool).to_string();
        self.stats.rounds_played += 1;
        self.input_buffer.clear();
        self.alert = None;

        self.target = analyze_root(&root, self.session.validator(), self.candidates).ok();
        let findable = self.target.as_ref().map_or(0, |t| t.total_words);
        self.add_message(
            &format!(
                "New root word: {} ({findable} words to find)",
                root.to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    /// Submit whatever is in the input buffer
    ///
    /// Does nothing but leave a hint while no round is running.
    pub fn submit(&mut self) {
        if !self.session.is_in_round() {
            self.add_message("Press TAB to get a root word.", MessageStyle::Info);
            return;
        }

        match self.session.submit_word(&self.input_buffer) {
            Ok(Some(accepted)) => {
                self.stats.words_found += 1;
                self.input_buffer.clear();
                self.add_message(
                    &format!("{} +{}", accepted.word.to_uppercase(), accepted.points),
                    MessageStyle::Success,
                );
                if self.round_complete() {
                    self.add_message(
                        "Every word found! Press TAB for a new root word.",
                        MessageStyle::Success,
                    );
                }
            }
            Ok(None) => self.input_buffer.clear(),
            Err(rejection) => {
                self.add_message(rejection.title(), MessageStyle::Error);
                self.alert = Some(rejection);
            }
        }
    }

    /// Close the rejection alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Whether every findable word of the round has been found
    #[must_use]
    pub fn round_complete(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|t| t.total_words > 0 && self.found_count() >= t.total_words)
    }

    /// Number of findable words already used this round
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.target.as_ref().map_or(0, |target| {
            self.session
                .used_words()
                .iter()
                .filter(|word| target.words.contains(word))
                .count()
        })
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.next_round(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.next_round();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
