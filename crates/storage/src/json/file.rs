use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::QuestionBank;

use super::parse_question_bank;
use crate::repository::{StageSource, StorageError};

/// Question bank read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStageSource {
    path: PathBuf,
}

impl FileStageSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StageSource for FileStageSource {
    async fn load_stages(&self) -> Result<QuestionBank, StorageError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => StorageError::NotFound {
                    path: self.path.clone(),
                },
                _ => StorageError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;
        parse_question_bank(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
