use std::path::PathBuf;
use std::sync::Arc;

use persona_core::model::Question;
use services::{Clock, ShuffleSource};

use crate::views::ViewError;
use crate::vm::QuizVm;

pub trait UiApp: Send + Sync {
    fn questions(&self) -> Arc<[Question]>;
    fn shuffle_source(&self) -> ShuffleSource;
    fn clock(&self) -> Clock;
    fn export_dir(&self) -> PathBuf;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<[Question]>,
    shuffle: ShuffleSource,
    clock: Clock,
    export_dir: PathBuf,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
            shuffle: app.shuffle_source(),
            clock: app.clock(),
            export_dir: app.export_dir(),
        }
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    /// A fresh, shuffled quiz over the configured bank.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptyQuiz` if the bank is empty.
    pub fn new_quiz(&self) -> Result<QuizVm, ViewError> {
        QuizVm::new(self.questions.to_vec(), self.shuffle, self.clock)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
