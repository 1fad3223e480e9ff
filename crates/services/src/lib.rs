#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod question_bank;
pub mod quiz;

pub use persona_core::Clock;

pub use error::{ExportError, QuestionBankError, QuizError};
pub use export::{ResultCard, export_file_name, export_result};
pub use question_bank::{QuestionBank, default_questions, load_questions};
pub use quiz::{
    DimensionScore, FinishOutcome, QuizProgress, QuizResult, QuizSession, QuizState,
    ShuffleSource,
};
