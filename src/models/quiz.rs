//! Quiz domain types.
//!
//! These mirror the catalog's storage shape: a quiz owns ordered questions,
//! each question owns its ordered answer options and the index of the
//! correct one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty rating of a quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A quiz without its questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// One selectable answer for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: Uuid,
    pub question_id: Uuid,
    pub text: String,
    pub order_index: u32,
}

/// A multiple-choice question with its ordered options.
///
/// `correct_option` indexes into `options` after they are sorted by
/// `order_index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub text: String,
    pub correct_option: usize,
    pub order_index: u32,
    pub options: Vec<AnswerOption>,
}

/// A quiz together with its ordered questions, as loaded from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizWithQuestions {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<Question>,
}

impl QuizWithQuestions {
    pub fn id(&self) -> Uuid {
        self.quiz.id
    }

    pub fn title(&self) -> &str {
        &self.quiz.title
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Look up a question by id.
    pub fn question(&self, id: Uuid) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
