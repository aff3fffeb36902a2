//! Pure scoring functions over recorded answers.
//!
//! Everything here is a function of `(answers, questions)` only; the
//! session caches the score but it must always match [`compute_score`]
//! applied to its current answers.

use uuid::Uuid;

use crate::models::{AnswerRecord, Question, UserAnswer};

/// Points awarded for a correct answer.
pub const CORRECT_POINTS: i32 = 10;

/// Points deducted for an incorrect answer (when the penalty applies).
pub const INCORRECT_PENALTY: i32 = 5;

fn find_question(questions: &[Question], id: Uuid) -> Option<&Question> {
    questions.iter().find(|q| q.id == id)
}

/// Whether an answer picked the question's correct option.
///
/// An answer referencing an unknown question id is incorrect.
pub fn is_correct(answer: &UserAnswer, questions: &[Question]) -> bool {
    find_question(questions, answer.question_id)
        .is_some_and(|q| q.correct_option == answer.selected_option)
}

/// Recompute the running score from scratch.
///
/// Walks the answers in recorded order: a correct answer adds 10; an
/// incorrect answer subtracts 5 only when the running total is nonzero at
/// that point. An incorrect answer while the total sits at exactly 0 leaves
/// it at 0, but once the total has moved off zero the penalty applies
/// unconditionally, even when it drives the score negative.
///
/// Because the penalty depends on the running total, overwriting an earlier
/// answer can change which later answers get penalized; callers must re-run
/// this over the full answer list after every change rather than patching
/// the score incrementally.
pub fn compute_score(answers: &[UserAnswer], questions: &[Question]) -> i32 {
    let mut score = 0;
    for answer in answers {
        if is_correct(answer, questions) {
            score += CORRECT_POINTS;
        } else if score != 0 {
            score -= INCORRECT_PENALTY;
        }
    }
    score
}

/// Flat point value shown in the transient score popup.
///
/// This is the display value only (+10 or -5); it ignores the zero-floor
/// rule and so is not the actual change to the running score.
pub fn answer_points(correct: bool) -> i32 {
    if correct {
        CORRECT_POINTS
    } else {
        -INCORRECT_PENALTY
    }
}

/// Grade every recorded answer for the attempt aggregate.
pub fn answer_records(answers: &[UserAnswer], questions: &[Question]) -> Vec<AnswerRecord> {
    answers
        .iter()
        .map(|answer| AnswerRecord {
            question_id: answer.question_id,
            selected_option: answer.selected_option,
            is_correct: is_correct(answer, questions),
        })
        .collect()
}

/// Number of recorded answers that are correct.
pub fn correct_count(answers: &[UserAnswer], questions: &[Question]) -> usize {
    answers.iter().filter(|a| is_correct(a, questions)).count()
}

/// Accuracy as a rounded percentage of the whole quiz.
///
/// Unanswered questions still count toward the denominator.
pub fn accuracy(correct: usize, total_questions: usize) -> u32 {
    if total_questions == 0 {
        return 0;
    }
    (correct as f64 / total_questions as f64 * 100.0).round() as u32
}
