//! Domain data model.

mod attempt;
mod quiz;

pub use attempt::{AnswerRecord, Attempt, UserAnswer};
pub use quiz::{AnswerOption, Difficulty, Question, Quiz, QuizWithQuestions};

/// Which top-level view the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browsing the quiz catalog.
    Browse,
    /// Taking a quiz.
    Play,
    /// Viewing the finished attempt.
    Result,
}
