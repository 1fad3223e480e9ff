use persona_core::model::{Choice, Question};
use services::{Clock, FinishOutcome, QuizError, QuizResult, QuizSession, QuizState, ShuffleSource};

use crate::views::ViewError;
use crate::vm::result_vm::{ResultVm, map_result};
use crate::vm::time_fmt::format_timer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Intro,
    Question,
    Results,
}

/// Outcome of pressing "Finish".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinishVm {
    Missing { numbers: Vec<usize>, message: String },
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub option_a: String,
    pub option_b: String,
    pub selected: Option<Choice>,
    pub is_first: bool,
    pub is_last: bool,
    pub progress_label: String,
    pub progress_percent: usize,
}

pub struct QuizVm {
    session: QuizSession,
    missing: Vec<usize>,
    result: Option<ResultVm>,
}

impl QuizVm {
    /// # Errors
    ///
    /// Returns `ViewError::EmptyQuiz` when the question bank is empty.
    pub fn new(questions: Vec<Question>, shuffle: ShuffleSource, clock: Clock) -> Result<Self, ViewError> {
        let session = QuizSession::new(questions, shuffle, clock).map_err(ViewError::from)?;
        Ok(Self {
            session,
            missing: Vec::new(),
            result: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self.session.state() {
            QuizState::NotStarted => QuizPhase::Intro,
            QuizState::InProgress => QuizPhase::Question,
            QuizState::Completed => QuizPhase::Results,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.len()
    }

    /// # Errors
    ///
    /// Returns `ViewError` if the quiz cannot be started.
    pub fn start(&mut self) -> Result<(), ViewError> {
        self.session.start().map_err(ViewError::from)
    }

    #[must_use]
    pub fn question(&self) -> QuestionVm {
        let position = self.session.current_position();
        let question = self.session.current_question();
        let progress = self.session.progress();
        QuestionVm {
            number: progress.current_number(),
            total: progress.total,
            prompt: question.prompt().to_string(),
            option_a: question.option(Choice::A).label.clone(),
            option_b: question.option(Choice::B).label.clone(),
            selected: self.session.answer(position).map(|a| a.choice),
            is_first: position == 0,
            is_last: position + 1 == progress.total,
            progress_label: format!("Question {} / {}", progress.current_number(), progress.total),
            progress_percent: progress.answered * 100 / progress.total.max(1),
        }
    }

    /// Records the choice for the current question and moves on.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` if the quiz is not accepting answers.
    pub fn choose(&mut self, choice: Choice) -> Result<(), ViewError> {
        self.session.answer_and_advance(choice).map_err(ViewError::from)?;
        let answered = self.session.answers();
        self.missing.retain(|n| answered.get(n - 1).is_some_and(Option::is_none));
        Ok(())
    }

    pub fn next(&mut self) {
        self.session.advance();
    }

    pub fn prev(&mut self) {
        self.session.retreat();
    }

    /// Jumps to a 1-indexed question number.
    pub fn go_to_number(&mut self, number: usize) {
        self.session.go_to(number.saturating_sub(1));
    }

    /// Numbers reported by the last refused finish that are still unanswered.
    #[must_use]
    pub fn missing(&self) -> &[usize] {
        &self.missing
    }

    /// Banner text for the questions still missing, if any.
    #[must_use]
    pub fn missing_notice(&self) -> Option<String> {
        (!self.missing.is_empty()).then(|| missing_message(&self.missing))
    }

    /// # Errors
    ///
    /// Returns `ViewError` if the quiz was never started or is already finished.
    pub fn finish(&mut self) -> Result<FinishVm, ViewError> {
        match self.session.finish().map_err(ViewError::from)? {
            FinishOutcome::Incomplete { missing } => {
                let message = missing_message(&missing);
                self.missing.clone_from(&missing);
                Ok(FinishVm::Missing {
                    numbers: missing,
                    message,
                })
            }
            FinishOutcome::Completed(result) => {
                self.missing.clear();
                self.result = Some(map_result(&result));
                Ok(FinishVm::Done)
            }
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&ResultVm> {
        self.result.as_ref()
    }

    /// The scored result, for export.
    #[must_use]
    pub fn quiz_result(&self) -> Option<&QuizResult> {
        self.session.result()
    }

    pub fn unlock_details(&mut self) {
        if let Some(result) = self.result.as_mut() {
            result.unlock();
        }
    }

    #[must_use]
    pub fn timer_text(&self) -> String {
        format_timer(self.session.elapsed())
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.missing.clear();
        self.result = None;
    }
}

fn missing_message(missing: &[usize]) -> String {
    let list = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if missing.len() == 1 {
        format!("Question {list} has not been answered yet.")
    } else {
        format!("Questions {list} have not been answered yet.")
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Empty => ViewError::EmptyQuiz,
            _ => ViewError::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::time::fixed_clock;
    use services::default_questions;

    fn vm() -> QuizVm {
        QuizVm::new(default_questions().unwrap(), ShuffleSource::Identity, fixed_clock()).unwrap()
    }

    #[test]
    fn starts_in_intro_and_moves_to_questions() {
        let mut vm = vm();
        assert_eq!(vm.phase(), QuizPhase::Intro);
        vm.start().unwrap();
        assert_eq!(vm.phase(), QuizPhase::Question);

        let question = vm.question();
        assert_eq!(question.number, 1);
        assert_eq!(question.progress_label, "Question 1 / 10");
        assert!(question.is_first);
        assert_eq!(question.selected, None);
        assert_eq!(vm.timer_text(), "Time: 0:00");
    }

    #[test]
    fn choose_advances_and_remembers_selection() {
        let mut vm = vm();
        vm.start().unwrap();
        vm.choose(Choice::B).unwrap();
        assert_eq!(vm.question().number, 2);
        assert_eq!(vm.question().progress_percent, 10);

        vm.prev();
        assert_eq!(vm.question().selected, Some(Choice::B));
    }

    #[test]
    fn finish_with_gaps_lists_missing_numbers() {
        let mut vm = vm();
        vm.start().unwrap();
        for _ in 0..8 {
            vm.choose(Choice::A).unwrap();
        }

        let outcome = vm.finish().unwrap();
        assert_eq!(
            outcome,
            FinishVm::Missing {
                numbers: vec![9, 10],
                message: "Questions 9, 10 have not been answered yet.".to_string(),
            }
        );
        assert_eq!(vm.phase(), QuizPhase::Question);

        vm.go_to_number(9);
        vm.choose(Choice::A).unwrap();
        assert_eq!(vm.missing(), &[10]);
        assert_eq!(
            vm.missing_notice().as_deref(),
            Some("Question 10 has not been answered yet.")
        );

        vm.go_to_number(10);
        vm.choose(Choice::B).unwrap();
        assert!(vm.missing_notice().is_none());
    }

    #[test]
    fn finish_then_unlock_then_reset() {
        let mut vm = vm();
        vm.start().unwrap();
        for _ in 0..10 {
            vm.choose(Choice::A).unwrap();
        }
        assert_eq!(vm.finish().unwrap(), FinishVm::Done);
        assert_eq!(vm.phase(), QuizPhase::Results);

        let result = vm.result().unwrap();
        assert_eq!(result.code, "ESTJ");
        assert!(!result.unlocked);
        assert!(vm.quiz_result().is_some());

        vm.unlock_details();
        assert!(vm.result().unwrap().unlocked);

        vm.reset();
        assert_eq!(vm.phase(), QuizPhase::Intro);
        assert!(vm.result().is_none());
        assert!(vm.quiz_result().is_none());
    }

    #[test]
    fn single_missing_question_uses_singular_message() {
        assert_eq!(missing_message(&[4]), "Question 4 has not been answered yet.");
    }
}
