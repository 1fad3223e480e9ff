use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TraitError {
    #[error("unknown trait letter: {0:?}")]
    UnknownLetter(char),

    #[error("trait letter must be a single character, got {0:?}")]
    NotSingleChar(String),
}

//
// ─── DIMENSION ────────────────────────────────────────────────────────────────
//

/// One of the four personality axes.
///
/// The declaration order is the order letters appear in a type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// Extraversion / Introversion.
    EI,
    /// Sensing / Intuition.
    SN,
    /// Thinking / Feeling.
    TF,
    /// Judging / Perceiving.
    JP,
}

impl Dimension {
    /// All dimensions in type-code order.
    pub const ALL: [Dimension; 4] = [Dimension::EI, Dimension::SN, Dimension::TF, Dimension::JP];

    /// The two poles of this dimension. The first pole wins ties.
    #[must_use]
    pub const fn poles(self) -> (TraitLetter, TraitLetter) {
        match self {
            Dimension::EI => (TraitLetter::E, TraitLetter::I),
            Dimension::SN => (TraitLetter::S, TraitLetter::N),
            Dimension::TF => (TraitLetter::T, TraitLetter::F),
            Dimension::JP => (TraitLetter::J, TraitLetter::P),
        }
    }

    /// Position of this dimension inside a type code (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Dimension::EI => 0,
            Dimension::SN => 1,
            Dimension::TF => 2,
            Dimension::JP => 3,
        }
    }

    #[must_use]
    pub fn contains(self, letter: TraitLetter) -> bool {
        letter.dimension() == self
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.poles();
        write!(f, "{a}/{b}")
    }
}

//
// ─── TRAIT LETTER ─────────────────────────────────────────────────────────────
//

/// One pole of one of the four dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraitLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl TraitLetter {
    pub const ALL: [TraitLetter; 8] = [
        TraitLetter::E,
        TraitLetter::I,
        TraitLetter::S,
        TraitLetter::N,
        TraitLetter::T,
        TraitLetter::F,
        TraitLetter::J,
        TraitLetter::P,
    ];

    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            TraitLetter::E | TraitLetter::I => Dimension::EI,
            TraitLetter::S | TraitLetter::N => Dimension::SN,
            TraitLetter::T | TraitLetter::F => Dimension::TF,
            TraitLetter::J | TraitLetter::P => Dimension::JP,
        }
    }

    /// The other pole of the same dimension.
    #[must_use]
    pub const fn opposite(self) -> TraitLetter {
        match self {
            TraitLetter::E => TraitLetter::I,
            TraitLetter::I => TraitLetter::E,
            TraitLetter::S => TraitLetter::N,
            TraitLetter::N => TraitLetter::S,
            TraitLetter::T => TraitLetter::F,
            TraitLetter::F => TraitLetter::T,
            TraitLetter::J => TraitLetter::P,
            TraitLetter::P => TraitLetter::J,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            TraitLetter::E => 'E',
            TraitLetter::I => 'I',
            TraitLetter::S => 'S',
            TraitLetter::N => 'N',
            TraitLetter::T => 'T',
            TraitLetter::F => 'F',
            TraitLetter::J => 'J',
            TraitLetter::P => 'P',
        }
    }

    /// Parses an uppercase or lowercase trait letter.
    ///
    /// # Errors
    ///
    /// Returns `TraitError::UnknownLetter` for anything outside `EISNTFJP`.
    pub fn from_char(c: char) -> Result<Self, TraitError> {
        match c.to_ascii_uppercase() {
            'E' => Ok(TraitLetter::E),
            'I' => Ok(TraitLetter::I),
            'S' => Ok(TraitLetter::S),
            'N' => Ok(TraitLetter::N),
            'T' => Ok(TraitLetter::T),
            'F' => Ok(TraitLetter::F),
            'J' => Ok(TraitLetter::J),
            'P' => Ok(TraitLetter::P),
            _ => Err(TraitError::UnknownLetter(c)),
        }
    }
}

impl fmt::Display for TraitLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for TraitLetter {
    type Error = TraitError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value)
    }
}

impl FromStr for TraitLetter {
    type Err = TraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(TraitError::NotSingleChar(s.to_string())),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
