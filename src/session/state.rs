//! The quiz-session state machine.

use uuid::Uuid;

use crate::models::{Attempt, Question, QuizWithQuestions, UserAnswer};
use crate::session::scoring;

/// Seconds granted per question.
pub const QUESTION_TIME_LIMIT: u32 = 20;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No quiz loaded.
    Idle,
    /// Quiz loaded, questions being answered.
    InProgress,
    /// Result reached; answers and score remain inspectable.
    Completed,
}

/// Immutable view of the session after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub current_question_index: usize,
    pub answers: Vec<UserAnswer>,
    pub score: i32,
    pub time_remaining: u32,
    pub show_result: bool,
}

/// A single quiz-taking session.
///
/// The session is passive: it owns no clock and performs no I/O. Every
/// transition mutates the state synchronously and returns a
/// [`SessionSnapshot`]; the once-per-second timer tick belongs to the
/// caller, which feeds it back in through [`set_time_remaining`] and
/// [`next_question`].
///
/// [`set_time_remaining`]: QuizSession::set_time_remaining
/// [`next_question`]: QuizSession::next_question
pub struct QuizSession {
    quiz: Option<QuizWithQuestions>,
    current_question_index: usize,
    user_answers: Vec<UserAnswer>,
    score: i32,
    time_remaining: u32,
    show_result: bool,
    player_name: String,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            quiz: None,
            current_question_index: 0,
            user_answers: Vec::new(),
            score: 0,
            time_remaining: 0,
            show_result: false,
            player_name: "Anonymous".to_string(),
        }
    }

    /// Set the name recorded on finished attempts.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Load a quiz and begin answering from the first question.
    ///
    /// Overwrites any prior session unconditionally.
    pub fn start_quiz(&mut self, quiz: QuizWithQuestions) -> SessionSnapshot {
        self.quiz = Some(quiz);
        self.current_question_index = 0;
        self.user_answers.clear();
        self.score = 0;
        self.time_remaining = QUESTION_TIME_LIMIT;
        self.show_result = false;
        self.snapshot()
    }

    /// Record (or overwrite) the answer for a question and recompute the
    /// running score over all recorded answers.
    ///
    /// A no-op while no quiz is loaded.
    pub fn select_answer(&mut self, question_id: Uuid, option_index: usize) -> SessionSnapshot {
        let Some(quiz) = &self.quiz else {
            return self.snapshot();
        };

        let answer = UserAnswer {
            question_id,
            selected_option: option_index,
        };
        match self
            .user_answers
            .iter_mut()
            .find(|a| a.question_id == question_id)
        {
            Some(existing) => *existing = answer,
            None => self.user_answers.push(answer),
        }

        self.score = scoring::compute_score(&self.user_answers, &quiz.questions);
        self.snapshot()
    }

    /// Advance to the next question, or mark the session completed when
    /// already on the last one. The index never moves past the last
    /// question.
    ///
    /// A no-op while no quiz is loaded.
    pub fn next_question(&mut self) -> SessionSnapshot {
        let Some(quiz) = &self.quiz else {
            return self.snapshot();
        };

        let next_index = self.current_question_index + 1;
        if next_index >= quiz.questions.len() {
            self.show_result = true;
        } else {
            self.current_question_index = next_index;
            self.time_remaining = QUESTION_TIME_LIMIT;
        }
        self.snapshot()
    }

    /// Step back one question, floored at the first. Never changes the
    /// result flag.
    ///
    /// A no-op while no quiz is loaded.
    pub fn previous_question(&mut self) -> SessionSnapshot {
        if self.quiz.is_none() {
            return self.snapshot();
        }

        self.current_question_index = self.current_question_index.saturating_sub(1);
        self.time_remaining = QUESTION_TIME_LIMIT;
        self.snapshot()
    }

    /// Finalize the session into an [`Attempt`].
    ///
    /// Returns `None` (touching nothing) when no quiz is loaded. Otherwise
    /// marks the session completed; answers and score stay readable after
    /// finishing.
    pub fn finish_quiz(&mut self) -> Option<Attempt> {
        let quiz = self.quiz.as_ref()?;

        let answers = scoring::answer_records(&self.user_answers, &quiz.questions);
        let correct_answers = answers.iter().filter(|a| a.is_correct).count();
        let attempt = Attempt {
            quiz_id: quiz.id(),
            player_name: self.player_name.clone(),
            score: self.score,
            total_questions: quiz.questions.len(),
            correct_answers,
            answers,
        };

        self.show_result = true;
        Some(attempt)
    }

    /// Overwrite the remaining time. No bounds are enforced; the ticking
    /// caller clamps at zero.
    pub fn set_time_remaining(&mut self, seconds: u32) -> SessionSnapshot {
        self.time_remaining = seconds;
        self.snapshot()
    }

    /// Drop the loaded quiz and return to idle defaults.
    pub fn reset_quiz(&mut self) -> SessionSnapshot {
        self.quiz = None;
        self.current_question_index = 0;
        self.user_answers.clear();
        self.score = 0;
        self.time_remaining = 0;
        self.show_result = false;
        self.snapshot()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.quiz.is_none() {
            SessionPhase::Idle
        } else if self.show_result {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            current_question_index: self.current_question_index,
            answers: self.user_answers.clone(),
            score: self.score,
            time_remaining: self.time_remaining,
            show_result: self.show_result,
        }
    }

    pub fn quiz(&self) -> Option<&QuizWithQuestions> {
        self.quiz.as_ref()
    }

    /// The question currently on screen.
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz
            .as_ref()
            .and_then(|q| q.questions.get(self.current_question_index))
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// The recorded answer for a question, if any.
    pub fn answer_for(&self, question_id: Uuid) -> Option<&UserAnswer> {
        self.user_answers
            .iter()
            .find(|a| a.question_id == question_id)
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.user_answers
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn show_result(&self) -> bool {
        self.show_result
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::scoring::compute_score;
    use crate::session::test_support::quiz_with_correct_options;

    fn started(correct_options: &[usize]) -> QuizSession {
        let mut session = QuizSession::new();
        session.start_quiz(quiz_with_correct_options(correct_options));
        session
    }

    #[test]
    fn test_start_quiz_resets_state() {
        let mut session = started(&[1, 2]);
        let q0 = session.quiz().unwrap().questions[0].id;
        session.select_answer(q0, 1);
        session.next_question();

        let snap = session.start_quiz(quiz_with_correct_options(&[0]));
        assert_eq!(snap.phase, SessionPhase::InProgress);
        assert_eq!(snap.current_question_index, 0);
        assert!(snap.answers.is_empty());
        assert_eq!(snap.score, 0);
        assert_eq!(snap.time_remaining, QUESTION_TIME_LIMIT);
        assert!(!snap.show_result);
    }

    #[test]
    fn test_select_answer_idempotent() {
        let mut session = started(&[1]);
        let q0 = session.quiz().unwrap().questions[0].id;

        let first = session.select_answer(q0, 1);
        let second = session.select_answer(q0, 1);
        assert_eq!(first.answers, second.answers);
        assert_eq!(first.score, second.score);
        assert_eq!(second.answers.len(), 1);
    }

    #[test]
    fn test_select_answer_overwrites() {
        let mut session = started(&[1]);
        let q0 = session.quiz().unwrap().questions[0].id;

        session.select_answer(q0, 1);
        assert_eq!(session.score(), 10);

        let snap = session.select_answer(q0, 2);
        assert_eq!(snap.answers.len(), 1);
        assert_eq!(snap.answers[0].selected_option, 2);
        // Single incorrect answer at a zero running total: no penalty.
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_score_matches_recomputation_after_overwrites() {
        let mut session = started(&[1, 2, 0]);
        let ids: Vec<_> = session.quiz().unwrap().questions.iter().map(|q| q.id).collect();

        session.select_answer(ids[0], 0);
        session.select_answer(ids[1], 2);
        session.select_answer(ids[2], 1);
        session.select_answer(ids[0], 1); // flip Q1 to correct

        let quiz = session.quiz().unwrap().clone();
        assert_eq!(
            session.score(),
            compute_score(session.answers(), &quiz.questions)
        );
    }

    #[test]
    fn test_next_question_advances_and_resets_timer() {
        let mut session = started(&[1, 1]);
        session.set_time_remaining(3);

        let snap = session.next_question();
        assert_eq!(snap.current_question_index, 1);
        assert_eq!(snap.time_remaining, QUESTION_TIME_LIMIT);
        assert!(!snap.show_result);
    }

    #[test]
    fn test_next_question_on_last_completes_without_moving() {
        let mut session = started(&[1, 1]);
        session.next_question();

        let snap = session.next_question();
        assert!(snap.show_result);
        assert_eq!(snap.current_question_index, 1);
        assert_eq!(snap.phase, SessionPhase::Completed);
    }

    #[test]
    fn test_previous_question_floors_at_zero() {
        let mut session = started(&[1, 1]);

        let snap = session.previous_question();
        assert_eq!(snap.current_question_index, 0);

        session.next_question();
        let snap = session.previous_question();
        assert_eq!(snap.current_question_index, 0);
        assert_eq!(snap.time_remaining, QUESTION_TIME_LIMIT);
        assert!(!snap.show_result);
    }

    #[test]
    fn test_finish_without_quiz_returns_none() {
        let mut session = QuizSession::new();
        assert!(session.finish_quiz().is_none());
        assert!(!session.show_result());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_finish_builds_attempt_aggregate() {
        // Q1 correct (+10), Q2 incorrect at nonzero total (-5).
        let mut session = started(&[1, 2]);
        let quiz_id = session.quiz().unwrap().id();
        let ids: Vec<_> = session.quiz().unwrap().questions.iter().map(|q| q.id).collect();

        session.select_answer(ids[0], 1);
        assert_eq!(session.score(), 10);
        session.select_answer(ids[1], 0);
        assert_eq!(session.score(), 5);

        let attempt = session.finish_quiz().expect("quiz loaded");
        assert_eq!(attempt.quiz_id, quiz_id);
        assert_eq!(attempt.score, 5);
        assert_eq!(attempt.total_questions, 2);
        assert_eq!(attempt.correct_answers, 1);
        assert_eq!(attempt.answers.len(), 2);
        assert!(attempt.answers[0].is_correct);
        assert!(!attempt.answers[1].is_correct);

        // Finishing completes the session but keeps it inspectable.
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.score(), 5);
        assert_eq!(session.answers().len(), 2);
    }

    #[test]
    fn test_operations_without_quiz_are_no_ops() {
        let mut session = QuizSession::new();
        let before = session.snapshot();

        assert_eq!(session.select_answer(Uuid::new_v4(), 0), before);
        assert_eq!(session.next_question(), before);
        assert_eq!(session.previous_question(), before);
    }

    #[test]
    fn test_reset_returns_to_idle_defaults() {
        let mut session = started(&[1]);
        let q0 = session.quiz().unwrap().questions[0].id;
        session.select_answer(q0, 1);
        session.finish_quiz();

        let snap = session.reset_quiz();
        assert_eq!(snap.phase, SessionPhase::Idle);
        assert_eq!(snap.current_question_index, 0);
        assert!(snap.answers.is_empty());
        assert_eq!(snap.score, 0);
        assert_eq!(snap.time_remaining, 0);
        assert!(!snap.show_result);
        assert!(session.quiz().is_none());
    }

    #[test]
    fn test_set_time_remaining_overwrites() {
        let mut session = started(&[1]);
        assert_eq!(session.set_time_remaining(7).time_remaining, 7);
        assert_eq!(session.set_time_remaining(0).time_remaining, 0);
    }

    #[test]
    fn test_player_name_recorded_on_attempt() {
        let mut session = QuizSession::new().with_player_name("Priya");
        session.start_quiz(quiz_with_correct_options(&[0]));
        let attempt = session.finish_quiz().unwrap();
        assert_eq!(attempt.player_name, "Priya");
    }
}
