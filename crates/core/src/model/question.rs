use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::trait_letter::{Dimension, TraitLetter};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {0:?} has an empty prompt")]
    EmptyPrompt(QuestionId),

    #[error("question {0:?} has an empty option label")]
    EmptyLabel(QuestionId),

    #[error("question {id:?} options {a} and {b} are not opposite poles of one dimension")]
    MismatchedPoles {
        id: QuestionId,
        a: TraitLetter,
        b: TraitLetter,
    },
}

//
// ─── IDS ──────────────────────────────────────────────────────────────────────
//

/// Identifier of a question inside a bank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── OPTIONS ──────────────────────────────────────────────────────────────────
//

/// Which of the two options was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

/// A labelled option tagged with the trait letter it votes for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub letter: TraitLetter,
}

impl AnswerOption {
    #[must_use]
    pub fn new(label: impl Into<String>, letter: TraitLetter) -> Self {
        Self {
            label: label.into(),
            letter,
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

#[derive(Deserialize)]
struct QuestionRecord {
    id: QuestionId,
    prompt: String,
    a: AnswerOption,
    b: AnswerOption,
}

/// A forced-choice question. Immutable once built.
///
/// Both options are the two poles of the same dimension, so every answer to
/// this question counts toward exactly one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    id: QuestionId,
    prompt: String,
    a: AnswerOption,
    b: AnswerOption,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.id, record.prompt, record.a, record.b)
    }
}

impl Question {
    /// Builds a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyLabel` for blank text.
    /// Returns `QuestionError::MismatchedPoles` unless the options are opposite poles.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        a: AnswerOption,
        b: AnswerOption,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt(id));
        }
        if a.label.trim().is_empty() || b.label.trim().is_empty() {
            return Err(QuestionError::EmptyLabel(id));
        }
        if a.letter.opposite() != b.letter {
            return Err(QuestionError::MismatchedPoles {
                id,
                a: a.letter,
                b: b.letter,
            });
        }

        Ok(Self { id, prompt, a, b })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn option(&self, choice: Choice) -> &AnswerOption {
        match choice {
            Choice::A => &self.a,
            Choice::B => &self.b,
        }
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.a.letter.dimension()
    }
}
