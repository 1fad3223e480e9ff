use chrono::{DateTime, Utc};
use std::fmt;

use persona_core::Clock;
use persona_core::model::{Answer, Choice, Question};
use persona_core::time::ElapsedTime;

use super::progress::QuizProgress;
use super::result::QuizResult;
use super::shuffle::{ShuffleSource, Shuffler};
use crate::error::QuizError;
use crate::question_bank::questions_per_dimension;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a quiz: `NotStarted → InProgress → Completed`, back to
/// `NotStarted` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress,
    Completed,
}

/// Result of a finish attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FinishOutcome {
    /// Some positions have no answer yet. Positions are 1-indexed.
    Incomplete { missing: Vec<usize> },
    Completed(QuizResult),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz over a shuffled copy of a question bank.
///
/// Holds one answer slot per position and a cursor that navigation moves
/// within `[0, len - 1]`.
pub struct QuizSession {
    bank: Vec<Question>,
    questions: Vec<Question>,
    answers: Vec<Option<Answer>>,
    current: usize,
    state: QuizState,
    shuffler: Shuffler,
    clock: Clock,
    started_at: Option<DateTime<Utc>>,
    result: Option<QuizResult>,
}

impl QuizSession {
    /// Creates a quiz over a shuffled copy of `questions`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(
        questions: Vec<Question>,
        source: ShuffleSource,
        clock: Clock,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        let mut session = Self {
            answers: vec![None; questions.len()],
            questions: questions.clone(),
            bank: questions,
            current: 0,
            state: QuizState::NotStarted,
            shuffler: Shuffler::new(source),
            clock,
            started_at: None,
            result: None,
        };
        session.shuffler.shuffle(&mut session.questions);
        Ok(session)
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Completed
    }

    /// Questions in presentation order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn question(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    #[must_use]
    pub fn answer(&self, position: usize) -> Option<&Answer> {
        self.answers.get(position).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<Answer>] {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Time spent so far, or the final time once completed.
    #[must_use]
    pub fn elapsed(&self) -> Option<ElapsedTime> {
        if let Some(result) = &self.result {
            return Some(result.elapsed());
        }
        self.started_at
            .map(|started| ElapsedTime::between(started, self.clock.now()))
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.len(),
            answered: self.answered_count(),
            current: self.current,
            is_complete: self.is_complete(),
        }
    }

    /// Moves from `NotStarted` to `InProgress` and starts the timer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if the quiz is already finished.
    pub fn start(&mut self) -> Result<(), QuizError> {
        match self.state {
            QuizState::NotStarted => {
                self.state = QuizState::InProgress;
                self.started_at = Some(self.clock.now());
                tracing::info!(questions = self.len(), "quiz started");
                Ok(())
            }
            QuizState::InProgress => Ok(()),
            QuizState::Completed => Err(QuizError::Completed),
        }
    }

    fn ensure_answerable(&self, position: usize) -> Result<(), QuizError> {
        match self.state {
            QuizState::NotStarted => return Err(QuizError::NotStarted),
            QuizState::Completed => return Err(QuizError::Completed),
            QuizState::InProgress => {}
        }
        if position >= self.len() {
            return Err(QuizError::PositionOutOfRange {
                position,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Records `choice` for the question at `position`, replacing any earlier answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted`, `QuizError::Completed` or
    /// `QuizError::PositionOutOfRange`.
    pub fn record_answer(&mut self, position: usize, choice: Choice) -> Result<&Answer, QuizError> {
        self.ensure_answerable(position)?;
        let answer = Answer::for_question(&self.questions[position], choice);
        tracing::debug!(position, letter = %answer.letter, "answer recorded");
        let stored = &*self.answers[position].insert(answer);
        Ok(stored)
    }

    /// Stores a caller-built answer as-is. Its letter is not checked against the question.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::record_answer`].
    pub fn record_raw_answer(&mut self, position: usize, answer: Answer) -> Result<(), QuizError> {
        self.ensure_answerable(position)?;
        self.answers[position] = Some(answer);
        Ok(())
    }

    /// Answers the current question and moves to the next one.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::record_answer`].
    pub fn answer_and_advance(&mut self, choice: Choice) -> Result<usize, QuizError> {
        self.record_answer(self.current, choice)?;
        Ok(self.advance())
    }

    /// Next question; stays put on the last one.
    pub fn advance(&mut self) -> usize {
        self.go_to(self.current.saturating_add(1))
    }

    /// Previous question; stays put on the first one.
    pub fn retreat(&mut self) -> usize {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Jumps to `position`, clamped to the last question.
    pub fn go_to(&mut self, position: usize) -> usize {
        let last = self.len().saturating_sub(1);
        self.current = position.min(last);
        tracing::debug!(position = self.current, "navigated");
        self.current
    }

    /// 1-indexed positions that still have no answer.
    #[must_use]
    pub fn missing_positions(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| answer.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Completes the quiz if every position is answered.
    ///
    /// With gaps, returns the missing positions and stays `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` before `start`, `QuizError::Completed` after
    /// a successful finish.
    pub fn finish(&mut self) -> Result<FinishOutcome, QuizError> {
        match self.state {
            QuizState::NotStarted => return Err(QuizError::NotStarted),
            QuizState::Completed => return Err(QuizError::Completed),
            QuizState::InProgress => {}
        }

        let missing = self.missing_positions();
        if !missing.is_empty() {
            tracing::info!(?missing, "finish refused, unanswered questions");
            return Ok(FinishOutcome::Incomplete { missing });
        }

        let completed_at = self.clock.now();
        let started_at = self.started_at.unwrap_or(completed_at);
        let answers: Vec<Answer> = self.answers.iter().flatten().copied().collect();
        let result = QuizResult::build(
            answers,
            questions_per_dimension(&self.bank),
            started_at,
            completed_at,
        );

        self.state = QuizState::Completed;
        self.result = Some(result.clone());
        tracing::info!(code = %result.code(), elapsed = %result.elapsed(), "quiz completed");
        Ok(FinishOutcome::Completed(result))
    }

    /// Drops all answers and timing, reshuffles and returns to `NotStarted`.
    pub fn reset(&mut self) {
        self.questions = self.bank.clone();
        self.shuffler.shuffle(&mut self.questions);
        self.answers = vec![None; self.questions.len()];
        self.current = 0;
        self.state = QuizState::NotStarted;
        self.started_at = None;
        self.result = None;
        tracing::info!("quiz reset");
    }

    /// Replaces the clock, e.g. to advance a fixed clock in tests.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answered", &self.answered_count())
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use persona_core::model::{QuestionId, TraitLetter};
    use persona_core::time::{fixed_clock, fixed_now};

    use crate::question_bank::default_questions;

    fn session(source: ShuffleSource) -> QuizSession {
        QuizSession::new(default_questions().unwrap(), source, fixed_clock()).unwrap()
    }

    fn ids(session: &QuizSession) -> Vec<u32> {
        session.questions().iter().map(|q| q.id().value()).collect()
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuizSession::new(Vec::new(), ShuffleSource::Identity, fixed_clock()).unwrap_err();
        assert_eq!(err, QuizError::Empty);
    }

    #[test]
    fn seeded_shuffle_is_deterministic_and_a_permutation() {
        let a = session(ShuffleSource::Seeded(7));
        let b = session(ShuffleSource::Seeded(7));
        assert_eq!(ids(&a), ids(&b));

        let mut sorted = ids(&a);
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn navigation_is_clamped() {
        let mut quiz = session(ShuffleSource::Identity);
        assert_eq!(quiz.retreat(), 0);
        for _ in 0..20 {
            quiz.advance();
        }
        assert_eq!(quiz.current_position(), 9);
        assert_eq!(quiz.advance(), 9);
        assert_eq!(quiz.go_to(42), 9);
        assert_eq!(quiz.go_to(3), 3);
        assert_eq!(quiz.retreat(), 2);
    }

    #[test]
    fn answering_requires_started_quiz() {
        let mut quiz = session(ShuffleSource::Identity);
        assert_eq!(quiz.record_answer(0, Choice::A).unwrap_err(), QuizError::NotStarted);
        assert_eq!(quiz.finish().unwrap_err(), QuizError::NotStarted);

        quiz.start().unwrap();
        assert_eq!(quiz.state(), QuizState::InProgress);
        assert_eq!(quiz.started_at(), Some(fixed_now()));
        assert_eq!(
            quiz.record_answer(10, Choice::A).unwrap_err(),
            QuizError::PositionOutOfRange { position: 10, len: 10 }
        );
    }

    #[test]
    fn later_answer_overwrites_earlier_one() {
        let mut quiz = session(ShuffleSource::Identity);
        quiz.start().unwrap();
        quiz.record_answer(0, Choice::A).unwrap();
        quiz.record_answer(0, Choice::B).unwrap();

        assert_eq!(quiz.answered_count(), 1);
        assert_eq!(quiz.answer(0).unwrap().letter, TraitLetter::I);
    }

    #[test]
    fn raw_answers_are_trusted() {
        let mut quiz = session(ShuffleSource::Identity);
        quiz.start().unwrap();
        let odd = Answer::new(QuestionId::new(1), Choice::A, TraitLetter::P);
        quiz.record_raw_answer(0, odd).unwrap();
        assert_eq!(quiz.answer(0), Some(&odd));
    }

    #[test]
    fn finish_with_one_gap_reports_that_position() {
        let mut quiz = session(ShuffleSource::Seeded(3));
        quiz.start().unwrap();
        for position in 0..10 {
            if position != 6 {
                quiz.record_answer(position, Choice::A).unwrap();
            }
        }

        let outcome = quiz.finish().unwrap();
        assert_eq!(outcome, FinishOutcome::Incomplete { missing: vec![7] });
        assert_eq!(quiz.state(), QuizState::InProgress);
        assert!(quiz.result().is_none());
    }

    #[test]
    fn full_run_completes_and_times_the_quiz() {
        let mut quiz = session(ShuffleSource::Identity);
        quiz.start().unwrap();
        while quiz.answered_count() < quiz.len() {
            quiz.answer_and_advance(Choice::A).unwrap();
        }
        let mut clock = fixed_clock();
        clock.advance(Duration::seconds(130));
        quiz.set_clock(clock);

        let FinishOutcome::Completed(result) = quiz.finish().unwrap() else {
            panic!("expected completion");
        };
        // Option A letters of the built-in bank: E I E S N S T F J P.
        assert_eq!(result.code().to_string(), "ESTJ");
        assert_eq!(result.elapsed().to_string(), "2 min 10 sec");
        assert!(quiz.is_complete());
        assert_eq!(quiz.finish().unwrap_err(), QuizError::Completed);
        assert_eq!(quiz.record_answer(0, Choice::B).unwrap_err(), QuizError::Completed);
    }

    #[test]
    fn reset_returns_to_fresh_state() {
        let mut quiz = session(ShuffleSource::Seeded(11));
        quiz.start().unwrap();
        for position in 0..quiz.len() {
            quiz.record_answer(position, Choice::B).unwrap();
        }
        quiz.go_to(5);
        assert!(matches!(quiz.finish().unwrap(), FinishOutcome::Completed(_)));

        quiz.reset();
        assert_eq!(quiz.state(), QuizState::NotStarted);
        assert_eq!(quiz.answered_count(), 0);
        assert_eq!(quiz.current_position(), 0);
        assert!(quiz.started_at().is_none());
        assert!(quiz.elapsed().is_none());
        assert!(quiz.result().is_none());
        assert_eq!(quiz.missing_positions().len(), 10);
        quiz.start().unwrap();
    }
}
