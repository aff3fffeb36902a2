//! Application orchestration: catalog browsing, the active session, and
//! the timer policy that drives it.

use std::time::{Duration, Instant};

use crate::catalog::{AttemptStore, QuizCatalog, OPTIONS_PER_QUESTION};
use crate::models::{AppState, Attempt};
use crate::session::{scoring, QuizSession};

/// How long the transient score popup stays on screen.
const SCORE_POPUP_DURATION: Duration = Duration::from_secs(2);

/// Transient popup shown after selecting an answer.
///
/// Carries the flat per-answer point value, not the running-score change.
pub struct ScorePopup {
    pub points: i32,
    pub correct: bool,
    shown_at: Instant,
}

pub struct App {
    pub state: AppState,
    catalog: QuizCatalog,
    session: QuizSession,
    selected_quiz: usize,
    selected_option: usize,
    score_popup: Option<ScorePopup>,
    last_attempt: Option<Attempt>,
    attempt_store: Option<AttemptStore>,
    save_error: Option<String>,
}

impl App {
    pub fn new(catalog: QuizCatalog) -> Self {
        Self {
            state: AppState::Browse,
            catalog,
            session: QuizSession::new(),
            selected_quiz: 0,
            selected_option: 0,
            score_popup: None,
            last_attempt: None,
            attempt_store: None,
            save_error: None,
        }
    }

    /// Record finished attempts under this player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.session = QuizSession::new().with_player_name(name);
        self
    }

    /// Persist finished attempts to the given store.
    pub fn with_attempt_store(mut self, store: AttemptStore) -> Self {
        self.attempt_store = Some(store);
        self
    }

    pub fn catalog(&self) -> &QuizCatalog {
        &self.catalog
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn selected_quiz(&self) -> usize {
        self.selected_quiz
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn score_popup(&self) -> Option<&ScorePopup> {
        self.score_popup.as_ref()
    }

    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.last_attempt.as_ref()
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    // --- Browse view ---

    pub fn select_next_quiz(&mut self) {
        let count = self.catalog.len();
        self.selected_quiz = (self.selected_quiz + 1) % count;
    }

    pub fn select_previous_quiz(&mut self) {
        let count = self.catalog.len();
        self.selected_quiz = (self.selected_quiz + count - 1) % count;
    }

    /// Start a session on the highlighted quiz.
    pub fn start_selected_quiz(&mut self) {
        let Some(quiz) = self.catalog.quizzes().get(self.selected_quiz).cloned() else {
            return;
        };
        self.session.start_quiz(quiz);
        self.selected_option = 0;
        self.score_popup = None;
        self.last_attempt = None;
        self.save_error = None;
        self.state = AppState::Play;
    }

    // --- Play view ---

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % OPTIONS_PER_QUESTION;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option =
            (self.selected_option + OPTIONS_PER_QUESTION - 1) % OPTIONS_PER_QUESTION;
    }

    /// Record the highlighted option as the answer for the current
    /// question and show the score popup.
    pub fn confirm_answer(&mut self) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        let question_id = question.id;
        let correct = question.correct_option == self.selected_option;

        self.score_popup = Some(ScorePopup {
            points: scoring::answer_points(correct),
            correct,
            shown_at: Instant::now(),
        });
        self.session.select_answer(question_id, self.selected_option);
    }

    /// Move to the next question, or finish the quiz from the last one.
    pub fn advance_question(&mut self) {
        let snapshot = self.session.next_question();
        if snapshot.show_result {
            self.complete_session();
        } else {
            self.sync_option_cursor();
        }
    }

    /// Step back to the previous question.
    pub fn go_back_question(&mut self) {
        self.session.previous_question();
        self.sync_option_cursor();
    }

    /// Called once per second while a question is on screen: count the
    /// timer down and auto-advance when it runs out.
    pub fn tick_second(&mut self) {
        if self.state != AppState::Play || self.session.show_result() {
            return;
        }

        let remaining = self.session.time_remaining();
        self.session.set_time_remaining(remaining.saturating_sub(1));
        if remaining <= 1 {
            self.advance_question();
        }
    }

    /// Drop the score popup once its display window has passed.
    pub fn expire_score_popup(&mut self) {
        if self
            .score_popup
            .as_ref()
            .is_some_and(|p| p.shown_at.elapsed() >= SCORE_POPUP_DURATION)
        {
            self.score_popup = None;
        }
    }

    fn complete_session(&mut self) {
        let Some(attempt) = self.session.finish_quiz() else {
            return;
        };

        if let Some(store) = &self.attempt_store {
            if let Err(e) = store.record(&attempt) {
                self.save_error = Some(e.to_string());
            }
        }

        self.last_attempt = Some(attempt);
        self.score_popup = None;
        self.state = AppState::Result;
    }

    /// Move the option cursor to the recorded answer for the current
    /// question, or the first option when unanswered.
    fn sync_option_cursor(&mut self) {
        self.selected_option = self
            .session
            .current_question()
            .and_then(|q| self.session.answer_for(q.id))
            .map(|a| a.selected_option)
            .unwrap_or(0);
    }

    // --- Result view ---

    /// Replay the quiz that was just finished.
    pub fn replay_quiz(&mut self) {
        let Some(quiz) = self.session.quiz().cloned() else {
            return;
        };
        self.session.start_quiz(quiz);
        self.selected_option = 0;
        self.last_attempt = None;
        self.save_error = None;
        self.state = AppState::Play;
    }

    /// Reset the session and return to the catalog.
    pub fn return_to_browse(&mut self) {
        self.session.reset_quiz();
        self.selected_option = 0;
        self.score_popup = None;
        self.last_attempt = None;
        self.save_error = None;
        self.state = AppState::Browse;
    }
}
