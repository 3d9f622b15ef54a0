use async_trait::async_trait;
use quiz_core::model::{QuestionBank, QuestionBankError, StageDraft};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading a question bank.
///
/// Every variant is fatal for the load attempt; there are no retries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read question bank {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid question bank: {0}")]
    Invalid(#[from] QuestionBankError),
}

/// Contract for anything that can produce the ordered stage sequence.
#[async_trait]
pub trait StageSource: Send + Sync {
    /// Load and validate every stage, preserving source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source is missing, unreadable, not valid
    /// JSON, or describes an invalid bank.
    async fn load_stages(&self) -> Result<QuestionBank, StorageError>;

    /// Human readable origin, used in logs and the `check` report.
    fn describe(&self) -> String;
}

/// Source backed by drafts held in memory, for tests and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStageSource {
    drafts: Vec<StageDraft>,
}

impl InMemoryStageSource {
    #[must_use]
    pub fn new(drafts: Vec<StageDraft>) -> Self {
        Self { drafts }
    }
}

#[async_trait]
impl StageSource for InMemoryStageSource {
    async fn load_stages(&self) -> Result<QuestionBank, StorageError> {
        Ok(QuestionBank::from_drafts(self.drafts.clone())?)
    }

    fn describe(&self) -> String {
        format!("in-memory ({} stages)", self.drafts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Difficulty, StageId};

    fn draft(id: u64) -> StageDraft {
        StageDraft {
            id: StageId::new(id),
            title: format!("Stage {id}"),
            question: "Q".into(),
            hint: String::new(),
            answer: "A".into(),
            explanation: String::new(),
            difficulty: Difficulty::Easy,
            points: 5,
            hint_penalty: 1,
        }
    }

    #[tokio::test]
    async fn in_memory_source_builds_bank() {
        let source = InMemoryStageSource::new(vec![draft(1), draft(2)]);
        let bank = source.load_stages().await.unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(source.describe(), "in-memory (2 stages)");
    }

    #[tokio::test]
    async fn empty_in_memory_source_is_invalid() {
        let source = InMemoryStageSource::default();
        let err = source.load_stages().await.unwrap_err();
        assert!(matches!(err, StorageError::Invalid(QuestionBankError::Empty)));
    }
}
