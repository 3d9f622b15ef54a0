use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::StageId;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// How hard a stage is. Purely informational; scoring comes from `points`.
///
/// Bank files may spell these in English or with the Korean labels
/// (`쉬움`, `보통`, `어려움`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "쉬움")]
    Easy,
    #[serde(alias = "보통")]
    Medium,
    #[serde(alias = "어려움")]
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// CSS class hook for the difficulty badge.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty-easy",
            Difficulty::Medium => "difficulty-medium",
            Difficulty::Hard => "difficulty-hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StageError {
    #[error("stage id must be > 0")]
    InvalidId,

    #[error("stage {id}: title cannot be empty")]
    EmptyTitle { id: StageId },

    #[error("stage {id}: question cannot be empty")]
    EmptyQuestion { id: StageId },

    #[error("stage {id}: answer cannot be empty")]
    EmptyAnswer { id: StageId },
}

//
// ─── STAGE TYPES ───────────────────────────────────────────────────────────────
//

/// Unvalidated stage as it appears in a question bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDraft {
    pub id: StageId,
    pub title: String,
    pub question: String,
    pub hint: String,
    pub answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub points: u32,
    pub hint_penalty: u32,
}

impl StageDraft {
    /// Validate the draft into an immutable `Stage`.
    ///
    /// # Errors
    ///
    /// Returns `StageError` if the id is zero or title/question/answer are blank.
    pub fn validate(self) -> Result<Stage, StageError> {
        if !self.id.is_valid() {
            return Err(StageError::InvalidId);
        }
        if self.title.trim().is_empty() {
            return Err(StageError::EmptyTitle { id: self.id });
        }
        if self.question.trim().is_empty() {
            return Err(StageError::EmptyQuestion { id: self.id });
        }
        if self.answer.trim().is_empty() {
            return Err(StageError::EmptyAnswer { id: self.id });
        }

        Ok(Stage {
            id: self.id,
            title: self.title,
            question: self.question,
            hint: self.hint,
            answer: self.answer,
            explanation: self.explanation,
            difficulty: self.difficulty,
            points: self.points,
            hint_penalty: self.hint_penalty,
        })
    }
}

/// One quiz question: prompt, expected answer, hint and scoring data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    id: StageId,
    title: String,
    question: String,
    hint: String,
    answer: String,
    explanation: String,
    difficulty: Difficulty,
    points: u32,
    hint_penalty: u32,
}

impl Stage {
    #[must_use]
    pub fn id(&self) -> StageId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn hint_penalty(&self) -> u32 {
        self.hint_penalty
    }

    /// Exact comparison after trimming surrounding whitespace on both sides.
    ///
    /// Markdown variants are not normalized: `*bold*` does not accept `_bold_`.
    #[must_use]
    pub fn accepts(&self, input: &str) -> bool {
        input.trim() == self.answer.trim()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
