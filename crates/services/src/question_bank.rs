use std::collections::HashSet;
use std::path::Path;

use persona_core::model::{AnswerOption, Dimension, Question, QuestionId, TraitLetter};

use crate::error::QuestionBankError;

use TraitLetter::{E, F, I, J, N, P, S, T};

// (id, prompt, option A, letter A, option B, letter B)
type Row = (u32, &'static str, &'static str, TraitLetter, &'static str, TraitLetter);

const DEFAULT_ROWS: [Row; 10] = [
    (
        1,
        "After a long week, how do you prefer to recharge?",
        "Meet friends somewhere lively",
        E,
        "Spend a quiet evening at home",
        I,
    ),
    (
        2,
        "When you meet new people at an event, you usually...",
        "Wait for someone to approach you",
        I,
        "Start conversations easily",
        E,
    ),
    (
        3,
        "When working through a problem, you tend to...",
        "Talk it through out loud with others",
        E,
        "Think it over alone first",
        I,
    ),
    (
        4,
        "Which kind of instructions do you find more useful?",
        "Concrete steps with examples",
        S,
        "The big picture and the underlying idea",
        N,
    ),
    (
        5,
        "When you read a story, you pay more attention to...",
        "Hidden meanings and where it might lead",
        N,
        "Details and what actually happens",
        S,
    ),
    (
        6,
        "You trust more in...",
        "Experience and proven facts",
        S,
        "Hunches and future possibilities",
        N,
    ),
    (
        7,
        "When a friend asks for advice, you first consider...",
        "What is fair and logical",
        T,
        "How they feel and what they need",
        F,
    ),
    (
        8,
        "In a disagreement, it matters more to you to...",
        "Keep the relationship harmonious",
        F,
        "Get to the correct answer",
        T,
    ),
    (
        9,
        "Before a trip, you usually...",
        "Plan the itinerary in advance",
        J,
        "Decide as you go",
        P,
    ),
    (
        10,
        "Your workspace is usually...",
        "Flexible and a little chaotic",
        P,
        "Tidy with everything in its place",
        J,
    ),
];

/// The compiled-in ten-question bank.
///
/// # Errors
///
/// Returns `QuestionBankError::Invalid` if a built-in row fails validation.
pub fn default_questions() -> Result<Vec<Question>, QuestionBankError> {
    DEFAULT_ROWS
        .iter()
        .map(|(id, prompt, a, la, b, lb)| {
            Question::new(
                QuestionId::new(*id),
                *prompt,
                AnswerOption::new(*a, *la),
                AnswerOption::new(*b, *lb),
            )
            .map_err(QuestionBankError::from)
        })
        .collect()
}

/// Reads a JSON array of questions from disk.
///
/// Each entry looks like
/// `{"id": 1, "prompt": "...", "a": {"label": "...", "letter": "E"}, "b": {...}}`.
///
/// # Errors
///
/// Returns `QuestionBankError` for IO failures, malformed or invalid questions,
/// an empty list, or duplicate ids.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, QuestionBankError> {
    let raw = std::fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_questions(&raw)?;
    tracing::info!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}

/// Parses and checks a JSON question list.
///
/// # Errors
///
/// See [`load_questions`].
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, QuestionBankError> {
    let questions: Vec<Question> = serde_json::from_str(raw)?;
    QuestionBank::new(questions).map(QuestionBank::into_questions)
}

//
// ─── BANK ─────────────────────────────────────────────────────────────────────
//

/// A non-empty question list with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` or `QuestionBankError::DuplicateId`.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionBankError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions })
    }

    /// # Errors
    ///
    /// See [`default_questions`].
    pub fn builtin() -> Result<Self, QuestionBankError> {
        Self::new(default_questions()?)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    #[must_use]
    pub fn per_dimension(&self) -> [usize; 4] {
        questions_per_dimension(&self.questions)
    }
}

/// Number of questions for each dimension, indexed by `Dimension::index`.
#[must_use]
pub fn questions_per_dimension(questions: &[Question]) -> [usize; 4] {
    let mut counts = [0; 4];
    for question in questions {
        counts[question.dimension().index()] += 1;
    }
    counts
}

#[must_use]
pub fn dimension_count(questions: &[Question], dimension: Dimension) -> usize {
    questions_per_dimension(questions)[dimension.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_has_ten_valid_questions() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.questions().len(), 10);
        assert_eq!(bank.per_dimension(), [3, 3, 2, 2]);
        assert_eq!(dimension_count(bank.questions(), Dimension::JP), 2);
    }

    #[test]
    fn parse_reads_json_bank() {
        let raw = r#"[
            {"id": 1, "prompt": "Party?", "a": {"label": "Yes", "letter": "E"}, "b": {"label": "No", "letter": "I"}},
            {"id": 2, "prompt": "Plan?", "a": {"label": "Yes", "letter": "J"}, "b": {"label": "No", "letter": "P"}}
        ]"#;
        let questions = parse_questions(raw).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].dimension(), Dimension::JP);
    }

    #[test]
    fn parse_rejects_mismatched_poles() {
        let raw = r#"[
            {"id": 1, "prompt": "Odd", "a": {"label": "x", "letter": "E"}, "b": {"label": "y", "letter": "T"}}
        ]"#;
        assert!(matches!(
            parse_questions(raw),
            Err(QuestionBankError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_unknown_letter() {
        let raw = r#"[
            {"id": 1, "prompt": "Odd", "a": {"label": "x", "letter": "X"}, "b": {"label": "y", "letter": "I"}}
        ]"#;
        assert!(matches!(
            parse_questions(raw),
            Err(QuestionBankError::Parse(_))
        ));
    }

    #[test]
    fn empty_and_duplicate_banks_are_rejected() {
        assert!(matches!(parse_questions("[]"), Err(QuestionBankError::Empty)));

        let mut questions = default_questions().unwrap();
        questions.push(questions[0].clone());
        assert!(matches!(
            QuestionBank::new(questions),
            Err(QuestionBankError::DuplicateId(id)) if id == QuestionId::new(1)
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_questions(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, QuestionBankError::Io { .. }));
    }
}
