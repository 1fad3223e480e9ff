use chrono::{DateTime, Utc};

use persona_core::model::{Answer, Dimension, TraitLetter, TypeCode};
use persona_core::profile::{TypeProfile, profile_for};
use persona_core::scoring::{Classification, classify, dimension_score};
use persona_core::time::ElapsedTime;

/// Percentages for both poles of one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub winner: TraitLetter,
    pub first_percent: f64,
    pub second_percent: f64,
    /// Questions in the bank for this dimension; the denominator of both percentages.
    pub questions: usize,
}

impl DimensionScore {
    #[must_use]
    pub fn percent(&self, letter: TraitLetter) -> f64 {
        let (first, second) = self.dimension.poles();
        if letter == first {
            self.first_percent
        } else if letter == second {
            self.second_percent
        } else {
            0.0
        }
    }

    /// Whole-number percentages for display. Complementary scores always add up to 100.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(&self) -> (u32, u32) {
        let first = self.first_percent.round() as u32;
        let second = if (self.first_percent + self.second_percent - 100.0).abs() < 1e-9 {
            100 - first
        } else {
            self.second_percent.round() as u32
        };
        (first, second)
    }
}

/// Everything the results page and the export need from a finished quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    classification: Classification,
    scores: [DimensionScore; 4],
    answers: Vec<Answer>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizResult {
    /// Scores `answers` against the per-dimension question counts of the bank.
    #[must_use]
    pub fn build(
        mut answers: Vec<Answer>,
        per_dimension: [usize; 4],
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        answers.sort_by_key(|answer| answer.question_id);
        let classification = classify(&answers);

        let scores = Dimension::ALL.map(|dimension| {
            let questions = per_dimension[dimension.index()];
            let tally = classification.tally(dimension);
            if tally.total() != questions {
                tracing::warn!(
                    %dimension,
                    answered = tally.total(),
                    questions,
                    "answer count does not match question count for dimension"
                );
            }
            let (first, second) = dimension.poles();
            DimensionScore {
                dimension,
                winner: tally.winner(),
                first_percent: dimension_score(&answers, first, questions),
                second_percent: dimension_score(&answers, second, questions),
                questions,
            }
        });

        Self {
            classification,
            scores,
            answers,
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn code(&self) -> TypeCode {
        self.classification.code()
    }

    #[must_use]
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    #[must_use]
    pub fn profile(&self) -> &'static TypeProfile {
        profile_for(self.code())
    }

    #[must_use]
    pub fn score(&self, dimension: Dimension) -> &DimensionScore {
        &self.scores[dimension.index()]
    }

    #[must_use]
    pub fn scores(&self) -> &[DimensionScore; 4] {
        &self.scores
    }

    /// Answers ordered by question id.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> ElapsedTime {
        ElapsedTime::between(self.started_at, self.completed_at)
    }
}
