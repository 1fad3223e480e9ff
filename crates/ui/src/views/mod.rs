mod home;
mod quiz;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use quiz::{QuestionCard, QuizIntent, QuizView};
pub use results::{ExportStatus, ResultsPanel};
pub use state::ViewError;
