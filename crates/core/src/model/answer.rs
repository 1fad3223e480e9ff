use serde::{Deserialize, Serialize};

use crate::model::question::{Choice, Question, QuestionId};
use crate::model::trait_letter::TraitLetter;

/// The option chosen for one question, carrying that option's trait letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub choice: Choice,
    pub letter: TraitLetter,
}

impl Answer {
    /// Builds an answer from raw parts. The letter is not checked against the question.
    #[must_use]
    pub fn new(question_id: QuestionId, choice: Choice, letter: TraitLetter) -> Self {
        Self {
            question_id,
            choice,
            letter,
        }
    }

    /// Builds an answer by picking one of the question's options.
    #[must_use]
    pub fn for_question(question: &Question, choice: Choice) -> Self {
        Self::new(question.id(), choice, question.option(choice).letter)
    }
}
