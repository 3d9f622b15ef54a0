use chrono::Duration;

/// Final numbers for a finished play-through, used by the completion screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSummary {
    pub points: u32,
    pub max_points: u32,
    pub stages: usize,
    pub hints_used: usize,
    pub elapsed: Duration,
}

impl CompletionSummary {
    /// True when every stage was solved without paying for a hint.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.hints_used == 0 && self.points == self.max_points
    }
}
