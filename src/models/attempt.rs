//! Answer and attempt records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An answer recorded during a session. At most one per question id;
/// re-answering overwrites in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: Uuid,
    pub selected_option: usize,
}

/// One graded answer inside a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: Uuid,
    pub selected_option: usize,
    pub is_correct: bool,
}

/// The aggregate produced when a session finishes.
///
/// `total_questions` counts the whole quiz, not just the answered
/// questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub quiz_id: Uuid,
    pub player_name: String,
    pub score: i32,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub answers: Vec<AnswerRecord>,
}
