//! # quizmaster
//!
//! A terminal quiz-taking application built around a reusable session
//! core: a quiz catalog supplies quizzes, a passive state machine tracks
//! the active session and its running score, and the terminal front end
//! owns the per-question countdown that drives it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizmaster::{QuizCatalog, QuizMaster, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the quiz catalog from a JSON file
//!     let catalog = QuizCatalog::from_json("quizzes.json")?;
//!
//!     // Run the app in the terminal
//!     QuizMaster::new(catalog).run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod catalog;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use catalog::{AttemptStore, CatalogError, QuizCatalog};
pub use models::{
    AnswerOption, AnswerRecord, AppState, Attempt, Difficulty, Question, Quiz,
    QuizWithQuestions, UserAnswer,
};
pub use session::{QuizSession, SessionPhase, SessionSnapshot};

/// How often the countdown fires.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long to wait for input before checking the clock.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Error type for running the app.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading the catalog or saving attempts.
    Catalog(CatalogError),
    /// IO error during terminal handling.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Catalog(e) => write!(f, "Failed to load quizzes: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Catalog(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<CatalogError> for QuizError {
    fn from(err: CatalogError) -> Self {
        QuizError::Catalog(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// The quiz application, ready to run in the terminal.
pub struct QuizMaster {
    app: App,
}

impl QuizMaster {
    /// Create the app over a loaded catalog.
    pub fn new(catalog: QuizCatalog) -> Self {
        Self {
            app: App::new(catalog),
        }
    }

    /// Load the catalog from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let catalog = QuizCatalog::from_json(path)?;
        Ok(Self::new(catalog))
    }

    /// Record finished attempts under this player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.app = self.app.with_player_name(name);
        self
    }

    /// Persist finished attempts to the given store.
    pub fn with_attempt_store(mut self, store: AttemptStore) -> Self {
        self.app = self.app.with_attempt_store(store);
        self
    }

    /// Run the app in the terminal.
    ///
    /// Takes over the terminal, displays the UI, and returns when the
    /// user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    let mut last_tick = Instant::now();

    loop {
        app.expire_score_popup();
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll with a timeout so the countdown keeps running while the
        // user is idle.
        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.tick_second();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Browse => handle_browse_input(app, key),
        AppState::Play => handle_play_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_browse_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_quiz();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_quiz();
            false
        }
        KeyCode::Enter => {
            app.start_selected_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_play_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.confirm_answer();
            false
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.advance_question();
            false
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.go_back_question();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.replay_quiz();
            false
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.return_to_browse();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
