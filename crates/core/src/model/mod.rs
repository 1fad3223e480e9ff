mod answer;
mod question;
mod trait_letter;
mod type_code;

pub use answer::Answer;
pub use question::{AnswerOption, Choice, Question, QuestionError, QuestionId};
pub use trait_letter::{Dimension, TraitError, TraitLetter};
pub use type_code::{TypeCode, TypeCodeError};
