use thiserror::Error;

use crate::model::{QuestionError, TraitError, TypeCodeError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Trait(#[from] TraitError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    TypeCode(#[from] TypeCodeError),
}
