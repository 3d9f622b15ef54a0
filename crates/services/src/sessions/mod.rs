mod progress;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::QuizError;
pub use progress::CompletionSummary;
pub use workflow::{QuizLoopService, QuizStep};
