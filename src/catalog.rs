//! Quiz catalog and attempt persistence.
//!
//! The catalog is a read-only set of quizzes loaded from a JSON file;
//! questions and options are sorted by their `order_index` on load, and the
//! authoring invariants (4 options per question, correct option in range)
//! are checked here rather than in the session core.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::{Attempt, QuizWithQuestions};

/// Options every question must carry.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Error loading or persisting catalog data.
#[derive(Debug)]
pub enum CatalogError {
    /// Reading or writing the backing file failed.
    Io(io::Error),
    /// The file is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// The catalog contains no quizzes.
    Empty,
    /// A quiz has no questions.
    NoQuestions { quiz: String },
    /// A question does not have exactly four options.
    WrongOptionCount { quiz: String, question: String, count: usize },
    /// A question's correct option does not index into its options.
    CorrectOptionOutOfRange { quiz: String, question: String, correct_option: usize },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "IO error: {}", e),
            CatalogError::Parse(e) => write!(f, "Invalid catalog JSON: {}", e),
            CatalogError::Empty => write!(f, "Catalog must contain at least one quiz"),
            CatalogError::NoQuestions { quiz } => {
                write!(f, "Quiz '{}' has no questions", quiz)
            }
            CatalogError::WrongOptionCount { quiz, question, count } => write!(
                f,
                "Question '{}' in quiz '{}' has {} options, expected {}",
                question, quiz, count, OPTIONS_PER_QUESTION
            ),
            CatalogError::CorrectOptionOutOfRange { quiz, question, correct_option } => write!(
                f,
                "Question '{}' in quiz '{}' marks option {} correct but has only {} options",
                question, quiz, correct_option, OPTIONS_PER_QUESTION
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// The set of quizzes available to play.
pub struct QuizCatalog {
    quizzes: Vec<QuizWithQuestions>,
}

impl QuizCatalog {
    /// Load a catalog from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let mut quizzes: Vec<QuizWithQuestions> = serde_json::from_str(json)?;

        if quizzes.is_empty() {
            return Err(CatalogError::Empty);
        }

        for quiz in &mut quizzes {
            quiz.questions.sort_by_key(|q| q.order_index);
            for question in &mut quiz.questions {
                question.options.sort_by_key(|o| o.order_index);
            }
            validate_quiz(quiz)?;
        }

        Ok(Self { quizzes })
    }

    pub fn quizzes(&self) -> &[QuizWithQuestions] {
        &self.quizzes
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    /// Look up a quiz by id.
    pub fn get(&self, id: Uuid) -> Option<&QuizWithQuestions> {
        self.quizzes.iter().find(|q| q.id() == id)
    }
}

fn validate_quiz(quiz: &QuizWithQuestions) -> Result<(), CatalogError> {
    if quiz.questions.is_empty() {
        return Err(CatalogError::NoQuestions {
            quiz: quiz.title().to_string(),
        });
    }

    for question in &quiz.questions {
        if question.options.len() != OPTIONS_PER_QUESTION {
            return Err(CatalogError::WrongOptionCount {
                quiz: quiz.title().to_string(),
                question: question.text.clone(),
                count: question.options.len(),
            });
        }
        if question.correct_option >= question.options.len() {
            return Err(CatalogError::CorrectOptionOutOfRange {
                quiz: quiz.title().to_string(),
                question: question.text.clone(),
                correct_option: question.correct_option,
            });
        }
    }

    Ok(())
}

/// Append-only store of finished attempts, backed by a JSON file.
///
/// A missing file reads as an empty list; each record rewrites the whole
/// array. No durability guarantees beyond that.
pub struct AttemptStore {
    path: PathBuf,
}

impl AttemptStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Load all recorded attempts.
    pub fn load(&self) -> Result<Vec<Attempt>, CatalogError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&json)?)
    }

    /// Append a finished attempt.
    pub fn record(&self, attempt: &Attempt) -> Result<(), CatalogError> {
        let mut attempts = self.load()?;
        attempts.push(attempt.clone());
        let json = serde_json::to_string_pretty(&attempts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option_json(question_id: &str, index: u32) -> String {
        format!(
            r#"{{"id": "{}", "question_id": "{}", "text": "Option {}", "order_index": {}}}"#,
            Uuid::new_v4(),
            question_id,
            index + 1,
            index
        )
    }

    fn catalog_json(correct_option: usize, option_count: u32) -> String {
        let quiz_id = Uuid::new_v4().to_string();
        let question_id = Uuid::new_v4().to_string();
        let options: Vec<String> = (0..option_count)
            .map(|i| option_json(&question_id, i))
            .collect();
        format!(
            r#"[{{
                "id": "{}",
                "title": "Science Fundamentals",
                "category": "Science",
                "difficulty": "medium",
                "questions": [{{
                    "id": "{}",
                    "quiz_id": "{}",
                    "text": "What is H2O?",
                    "correct_option": {},
                    "order_index": 0,
                    "options": [{}]
                }}]
            }}]"#,
            quiz_id,
            question_id,
            quiz_id,
            correct_option,
            options.join(",")
        )
    }

    #[test]
    fn test_load_valid_catalog() {
        let catalog = QuizCatalog::from_json_str(&catalog_json(2, 4)).unwrap();
        assert_eq!(catalog.len(), 1);
        let quiz = &catalog.quizzes()[0];
        assert_eq!(quiz.title(), "Science Fundamentals");
        assert_eq!(quiz.questions[0].options.len(), 4);
        assert!(catalog.get(quiz.id()).is_some());
        assert!(catalog.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            QuizCatalog::from_json_str("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            QuizCatalog::from_json_str("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_wrong_option_count_rejected() {
        assert!(matches!(
            QuizCatalog::from_json_str(&catalog_json(0, 3)),
            Err(CatalogError::WrongOptionCount { count: 3, .. })
        ));
    }

    #[test]
    fn test_correct_option_out_of_range_rejected() {
        assert!(matches!(
            QuizCatalog::from_json_str(&catalog_json(4, 4)),
            Err(CatalogError::CorrectOptionOutOfRange { correct_option: 4, .. })
        ));
    }

    #[test]
    fn test_questions_and_options_sorted_by_order_index() {
        let quiz_id = Uuid::new_v4().to_string();
        let q1 = Uuid::new_v4().to_string();
        let q2 = Uuid::new_v4().to_string();
        // Questions listed out of order; options of the first listed
        // question reversed.
        let opts_q1: Vec<String> = (0..4u32).rev().map(|i| option_json(&q1, i)).collect();
        let opts_q2: Vec<String> = (0..4u32).map(|i| option_json(&q2, i)).collect();
        let json = format!(
            r#"[{{
                "id": "{quiz_id}",
                "title": "Ordering",
                "category": "Testing",
                "questions": [
                    {{"id": "{q1}", "quiz_id": "{quiz_id}", "text": "Second",
                      "correct_option": 0, "order_index": 1, "options": [{}]}},
                    {{"id": "{q2}", "quiz_id": "{quiz_id}", "text": "First",
                      "correct_option": 0, "order_index": 0, "options": [{}]}}
                ]
            }}]"#,
            opts_q1.join(","),
            opts_q2.join(","),
        );

        let catalog = QuizCatalog::from_json_str(&json).unwrap();
        let quiz = &catalog.quizzes()[0];
        assert_eq!(quiz.questions[0].text, "First");
        assert_eq!(quiz.questions[1].text, "Second");
        let order: Vec<u32> = quiz.questions[1].options.iter().map(|o| o.order_index).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_attempt_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("quizmaster-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let store = AttemptStore::new(dir.join("attempts.json"));

        // Missing file reads as empty.
        assert!(store.load().unwrap().is_empty());

        let attempt = Attempt {
            quiz_id: Uuid::new_v4(),
            player_name: "Anonymous".to_string(),
            score: 5,
            total_questions: 2,
            correct_answers: 1,
            answers: Vec::new(),
        };
        store.record(&attempt).unwrap();
        store.record(&attempt).unwrap();

        let attempts = store.load().unwrap();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].score, 5);
        assert_eq!(attempts[0].quiz_id, attempt.quiz_id);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
