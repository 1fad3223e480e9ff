/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    /// Zero-based position of the question on screen.
    pub current: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// One-based question number for display.
    #[must_use]
    pub fn current_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.answered == self.total
    }
}
