use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::StageId;
use crate::model::stage::{Stage, StageDraft, StageError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank has no stages")]
    Empty,

    #[error("duplicate stage id {id}")]
    DuplicateId { id: StageId },

    #[error(transparent)]
    Stage(#[from] StageError),
}

/// Ordered, read-only sequence of stages.
///
/// Order is the order of the source; ids are unique but not re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    stages: Vec<Stage>,
}

impl QuestionBank {
    /// Build a bank from already validated stages.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` for an empty list and
    /// `QuestionBankError::DuplicateId` when two stages share an id.
    pub fn new(stages: Vec<Stage>) -> Result<Self, QuestionBankError> {
        if stages.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        let mut seen = HashSet::with_capacity(stages.len());
        for stage in &stages {
            if !seen.insert(stage.id()) {
                return Err(QuestionBankError::DuplicateId { id: stage.id() });
            }
        }

        Ok(Self { stages })
    }

    /// Validate every draft, then build the bank.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered, in source order.
    pub fn from_drafts(drafts: Vec<StageDraft>) -> Result<Self, QuestionBankError> {
        let stages = drafts
            .into_iter()
            .map(StageDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stages)
    }

    /// Number of stages. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage at a 1-based position.
    #[must_use]
    pub fn stage(&self, index: usize) -> Option<&Stage> {
        index.checked_sub(1).and_then(|i| self.stages.get(i))
    }

    #[must_use]
    pub fn first(&self) -> &Stage {
        &self.stages[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// Maximum score reachable without hints.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.stages
            .iter()
            .fold(0_u32, |acc, stage| acc.saturating_add(stage.points()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn draft(id: u64, points: u32) -> StageDraft {
        StageDraft {
            id: StageId::new(id),
            title: format!("Stage {id}"),
            question: "Q".into(),
            hint: String::new(),
            answer: "A".into(),
            explanation: String::new(),
            difficulty: Difficulty::Medium,
            points,
            hint_penalty: 0,
        }
    }

    #[test]
    fn keeps_source_order() {
        let bank = QuestionBank::from_drafts(vec![draft(3, 1), draft(1, 2), draft(2, 3)]).unwrap();
        let ids: Vec<u64> = bank.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(bank.first().id(), StageId::new(3));
    }

    #[test]
    fn stage_lookup_is_one_based() {
        let bank = QuestionBank::from_drafts(vec![draft(1, 1), draft(2, 2)]).unwrap();
        assert!(bank.stage(0).is_none());
        assert_eq!(bank.stage(1).unwrap().id(), StageId::new(1));
        assert_eq!(bank.stage(2).unwrap().id(), StageId::new(2));
        assert!(bank.stage(3).is_none());
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert_eq!(QuestionBank::new(Vec::new()).unwrap_err(), QuestionBankError::Empty);
        let err = QuestionBank::from_drafts(vec![draft(1, 1), draft(1, 2)]).unwrap_err();
        assert_eq!(err, QuestionBankError::DuplicateId { id: StageId::new(1) });
    }

    #[test]
    fn invalid_draft_surfaces_stage_error() {
        let mut bad = draft(2, 1);
        bad.title = " ".into();
        let err = QuestionBank::from_drafts(vec![draft(1, 1), bad]).unwrap_err();
        assert!(matches!(err, QuestionBankError::Stage(StageError::EmptyTitle { .. })));
    }

    #[test]
    fn total_points_sums_stages() {
        let bank = QuestionBank::from_drafts(vec![draft(1, 10), draft(2, 15)]).unwrap();
        assert_eq!(bank.total_points(), 25);
    }
}
