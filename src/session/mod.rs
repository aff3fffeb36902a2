//! Quiz session core: the state machine and the scoring engine.
//!
//! The session is a passive, synchronous state machine over a single loaded
//! quiz; the scoring module holds the pure functions it delegates to. The
//! timer tick that drives auto-advance lives with the UI, not here.

pub mod scoring;
mod state;

pub use state::{QuizSession, SessionPhase, SessionSnapshot, QUESTION_TIME_LIMIT};

#[cfg(test)]
pub(crate) mod test_support {
    use uuid::Uuid;

    use crate::models::{AnswerOption, Question, Quiz, QuizWithQuestions};

    /// Build a quiz with 4 options per question and the given correct
    /// option index for each question.
    pub fn quiz_with_correct_options(correct_options: &[usize]) -> QuizWithQuestions {
        let quiz_id = Uuid::new_v4();
        let questions = correct_options
            .iter()
            .enumerate()
            .map(|(i, &correct)| {
                let question_id = Uuid::new_v4();
                let options = (0..4u32)
                    .map(|j| AnswerOption {
                        id: Uuid::new_v4(),
                        question_id,
                        text: format!("Option {}", j + 1),
                        order_index: j,
                    })
                    .collect();
                Question {
                    id: question_id,
                    quiz_id,
                    text: format!("Question {}", i + 1),
                    correct_option: correct,
                    order_index: i as u32,
                    options,
                }
            })
            .collect();

        QuizWithQuestions {
            quiz: Quiz {
                id: quiz_id,
                title: "Test Quiz".to_string(),
                category: "Testing".to_string(),
                difficulty: Default::default(),
            },
            questions,
        }
    }
}
