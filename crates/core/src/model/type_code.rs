use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::trait_letter::{Dimension, TraitError, TraitLetter};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeCodeError {
    #[error("type code must have exactly 4 letters, got {0}")]
    WrongLength(usize),

    #[error("letter {letter} cannot appear at position {position}")]
    WrongPosition { letter: TraitLetter, position: usize },

    #[error(transparent)]
    Letter(#[from] TraitError),
}

/// Four-letter classification code, one letter per dimension in `EI SN TF JP` order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode([TraitLetter; 4]);

impl TypeCode {
    /// Builds a code from four letters.
    ///
    /// # Errors
    ///
    /// Returns `TypeCodeError::WrongPosition` if a letter is outside its dimension.
    pub fn from_letters(letters: [TraitLetter; 4]) -> Result<Self, TypeCodeError> {
        for (position, (letter, dimension)) in letters.iter().zip(Dimension::ALL).enumerate() {
            if !dimension.contains(*letter) {
                return Err(TypeCodeError::WrongPosition {
                    letter: *letter,
                    position,
                });
            }
        }
        Ok(Self(letters))
    }

    /// Builds a code by picking one pole for each dimension.
    pub(crate) fn from_winners(winners: [TraitLetter; 4]) -> Self {
        debug_assert!(
            winners
                .iter()
                .zip(Dimension::ALL)
                .all(|(letter, dim)| dim.contains(*letter))
        );
        Self(winners)
    }

    /// All 16 codes, first poles first.
    #[must_use]
    pub fn all() -> Vec<TypeCode> {
        let mut codes = Vec::with_capacity(16);
        for mask in 0..16_u8 {
            let mut letters = [TraitLetter::E; 4];
            for dimension in Dimension::ALL {
                let (first, second) = dimension.poles();
                let bit = 3 - dimension.index();
                letters[dimension.index()] = if mask & (1 << bit) == 0 {
                    first
                } else {
                    second
                };
            }
            codes.push(Self(letters));
        }
        codes
    }

    #[must_use]
    pub fn letters(&self) -> [TraitLetter; 4] {
        self.0
    }

    #[must_use]
    pub fn letter(&self, dimension: Dimension) -> TraitLetter {
        self.0[dimension.index()]
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeCode({self})")
    }
}

impl FromStr for TypeCode {
    type Err = TypeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let [a, b, c, d] = chars.as_slice() else {
            return Err(TypeCodeError::WrongLength(chars.len()));
        };
        Self::from_letters([
            TraitLetter::from_char(*a)?,
            TraitLetter::from_char(*b)?,
            TraitLetter::from_char(*c)?,
            TraitLetter::from_char(*d)?,
        ])
    }
}

impl TryFrom<String> for TypeCode {
    type Error = TypeCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}
