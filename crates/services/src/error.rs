//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionError;
use storage::StorageError;

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// The question bank could not be loaded; no stage can be shown.
    #[error(transparent)]
    Load(#[from] StorageError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
