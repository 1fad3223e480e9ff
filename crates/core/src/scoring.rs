//! Reduces an answer sequence into a four-letter type code.
//!
//! Each dimension is decided independently by majority over the answers whose
//! letter belongs to it. On a tie the first pole of the pair wins, so the
//! defaults are `E`, `S`, `T` and `J`.

use crate::model::{Answer, Dimension, TraitLetter, TypeCode};

/// Letter chosen for each dimension when both poles have the same count.
pub const TIE_BREAK: [TraitLetter; 4] = [TraitLetter::E, TraitLetter::S, TraitLetter::T, TraitLetter::J];

/// Code returned when there are no answers at all. Equal to the all-ties outcome.
#[must_use]
pub fn default_code() -> TypeCode {
    TypeCode::from_winners(TIE_BREAK)
}

//
// ─── TALLY ────────────────────────────────────────────────────────────────────
//

/// Counts for the two poles of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionTally {
    pub dimension: Dimension,
    pub first: usize,
    pub second: usize,
}

impl DimensionTally {
    #[must_use]
    pub fn total(&self) -> usize {
        self.first + self.second
    }

    #[must_use]
    pub fn count(&self, letter: TraitLetter) -> usize {
        let (first, second) = self.dimension.poles();
        if letter == first {
            self.first
        } else if letter == second {
            self.second
        } else {
            0
        }
    }

    /// Letter with the strictly higher count, first pole on a tie.
    #[must_use]
    pub fn winner(&self) -> TraitLetter {
        let (first, second) = self.dimension.poles();
        if self.second > self.first { second } else { first }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.first == self.second
    }

    /// Percentage of this dimension's answers that went to `letter`.
    #[must_use]
    pub fn percent(&self, letter: TraitLetter) -> f64 {
        percent_of(self.count(letter), self.total())
    }
}

/// Counts answers for both poles of `dimension`. Answers for other dimensions are ignored.
#[must_use]
pub fn tally(answers: &[Answer], dimension: Dimension) -> DimensionTally {
    let (first, second) = dimension.poles();
    let mut tally = DimensionTally {
        dimension,
        first: 0,
        second: 0,
    };
    for answer in answers {
        if answer.letter == first {
            tally.first += 1;
        } else if answer.letter == second {
            tally.second += 1;
        }
    }
    tally
}

#[must_use]
pub fn count_letter(answers: &[Answer], letter: TraitLetter) -> usize {
    answers.iter().filter(|a| a.letter == letter).count()
}

//
// ─── CLASSIFICATION ───────────────────────────────────────────────────────────
//

/// Winning letters plus the per-dimension counts they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    code: TypeCode,
    tallies: [DimensionTally; 4],
}

impl Classification {
    #[must_use]
    pub fn code(&self) -> TypeCode {
        self.code
    }

    #[must_use]
    pub fn tally(&self, dimension: Dimension) -> DimensionTally {
        self.tallies[dimension.index()]
    }

    #[must_use]
    pub fn tallies(&self) -> &[DimensionTally; 4] {
        &self.tallies
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.tallies.iter().map(DimensionTally::total).sum()
    }
}

/// Classifies an answer sequence. Never fails: an empty sequence yields [`default_code`].
#[must_use]
pub fn classify(answers: &[Answer]) -> Classification {
    if answers.is_empty() {
        tracing::debug!("classifying empty answer set, using default code");
    }

    let tallies = Dimension::ALL.map(|dimension| tally(answers, dimension));
    let code = TypeCode::from_winners(tallies.map(|t| t.winner()));

    Classification { code, tallies }
}

//
// ─── SCORES ───────────────────────────────────────────────────────────────────
//

/// `count(letter) / total * 100`, unrounded and kept inside `[0, 100]`.
///
/// A `total` of zero scores `0.0`.
#[must_use]
pub fn dimension_score(answers: &[Answer], letter: TraitLetter, total: usize) -> f64 {
    percent_of(count_letter(answers, letter), total)
}

#[allow(clippy::cast_precision_loss)]
fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 100.0 / total as f64).clamp(0.0, 100.0)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
