mod progress;
mod result;
mod session;
mod shuffle;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use result::{DimensionScore, QuizResult};
pub use session::{FinishOutcome, QuizSession, QuizState};
pub use shuffle::ShuffleSource;
