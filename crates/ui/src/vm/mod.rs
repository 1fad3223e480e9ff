mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use quiz_vm::{FinishVm, QuestionVm, QuizPhase, QuizVm};
pub use result_vm::{ResultVm, ScoreRowVm, map_result};
pub use time_fmt::{format_elapsed, format_timer};
