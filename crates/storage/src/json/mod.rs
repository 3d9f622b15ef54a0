use async_trait::async_trait;
use quiz_core::model::{QuestionBank, StageDraft};
use serde::Deserialize;

use crate::repository::{StageSource, StorageError};

mod file;

pub use file::FileStageSource;

/// Default question bank shipped with the application.
pub const BUNDLED_STAGES: &str = include_str!("../../data/stages.json");

/// On-disk shape: `{ "stages": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct BankFile {
    stages: Vec<StageDraft>,
}

/// Parse and validate a JSON question bank.
///
/// # Errors
///
/// Returns `StorageError::Parse` for malformed JSON or missing fields and
/// `StorageError::Invalid` when the stages break bank invariants.
pub fn parse_question_bank(text: &str) -> Result<QuestionBank, StorageError> {
    let file: BankFile = serde_json::from_str(text)?;
    Ok(QuestionBank::from_drafts(file.stages)?)
}

/// The bank compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStageSource;

#[async_trait]
impl StageSource for BundledStageSource {
    async fn load_stages(&self) -> Result<QuestionBank, StorageError> {
        parse_question_bank(BUNDLED_STAGES)
    }

    fn describe(&self) -> String {
        "bundled question bank".to_string()
    }
}
