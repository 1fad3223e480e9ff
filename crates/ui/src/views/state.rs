#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyQuiz,
    Export,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptyQuiz => "There are no questions to show.",
            ViewError::Export => "Could not save the image. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
