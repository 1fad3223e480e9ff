//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use persona_core::model::{QuestionError, QuestionId};

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for quiz")]
    Empty,
    #[error("quiz has not been started")]
    NotStarted,
    #[error("quiz already completed")]
    Completed,
    #[error("position {position} is out of range for {len} questions")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Errors emitted while building or loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid question bank JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionError),
    #[error("question bank is empty")]
    Empty,
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),
}

/// Errors emitted while exporting a result image.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
