use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::{QuestionBank, Stage, StageId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Completed,
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Presentation-neutral tag for the effect that should accompany a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackCue {
    Start,
    Hint,
    Correct,
    Wrong,
}

/// Result of viewing the current stage's hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintOutcome {
    pub stage_id: StageId,
    pub hint: String,
    /// Points actually removed; smaller than the penalty when the score hit zero.
    pub penalty_applied: u32,
    /// `false` when the hint was already paid for earlier in the session.
    pub first_view: bool,
}

impl HintOutcome {
    #[must_use]
    pub fn cue(&self) -> FeedbackCue {
        FeedbackCue::Hint
    }
}

/// Result of submitting an answer for the current stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct {
        stage_id: StageId,
        awarded: u32,
        explanation: String,
        /// 1-based index of the next stage, `None` when the session completed.
        advanced_to: Option<usize>,
        completed: bool,
    },
    Mismatch {
        stage_id: StageId,
    },
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmitOutcome::Correct { .. })
    }

    #[must_use]
    pub fn cue(&self) -> FeedbackCue {
        match self {
            SubmitOutcome::Correct { .. } => FeedbackCue::Correct,
            SubmitOutcome::Mismatch { .. } => FeedbackCue::Wrong,
        }
    }
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Immutable copy of what the presentation layer needs to render a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub stage_index: usize,
    pub stage_count: usize,
    pub stage_id: StageId,
    pub points: u32,
    pub max_points: u32,
    pub is_complete: bool,
    pub hint_used: bool,
    pub draft: String,
}

impl SessionSnapshot {
    /// Fraction of the journey reached, `stage_index / stage_count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.stage_count == 0 {
            return 0.0;
        }
        self.stage_index as f64 / self.stage_count as f64
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Stage-progression state machine for one play-through.
///
/// Holds the 1-based current stage index, the score, which hints were paid for
/// and the unsaved answer draft. The index always stays within `1..=N`; after the
/// last stage is answered the session is marked complete and stops accepting
/// hint/answer/draft actions.
#[derive(Clone)]
pub struct Session {
    bank: Arc<QuestionBank>,
    current: usize,
    points: u32,
    hint_used: HashSet<StageId>,
    draft: String,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Start a fresh session at stage 1 with zero points.
    #[must_use]
    pub fn start(bank: Arc<QuestionBank>, started_at: DateTime<Utc>) -> Self {
        Self {
            bank,
            current: 1,
            points: 0,
            hint_used: HashSet::new(),
            draft: String::new(),
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// 1-based index of the active stage.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.bank.len()
    }

    /// The active stage. After completion this stays on the last stage.
    #[must_use]
    pub fn current_stage(&self) -> &Stage {
        self.bank
            .stage(self.current)
            .unwrap_or_else(|| self.bank.first())
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn hint_used(&self, stage_id: StageId) -> bool {
        self.hint_used.contains(&stage_id)
    }

    /// Number of stages whose hint has been paid for.
    #[must_use]
    pub fn hints_used_count(&self) -> usize {
        self.hint_used.len()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Time from start to completion, once completed.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.completed_at.map(|done| done - self.started_at)
    }

    /// Replace the unsaved answer text.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished.
    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.draft = text.into();
        Ok(())
    }

    /// Reveal the current stage's hint, charging its penalty the first time only.
    ///
    /// The deduction is clamped at zero when applied; later awards add to the
    /// clamped value.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished.
    pub fn view_hint(&mut self) -> Result<HintOutcome, SessionError> {
        self.ensure_active()?;
        let stage = self.current_stage();
        let stage_id = stage.id();
        let hint = stage.hint().to_owned();
        let penalty = stage.hint_penalty();

        let first_view = self.hint_used.insert(stage_id);
        let penalty_applied = if first_view {
            let before = self.points;
            self.points = self.points.saturating_sub(penalty);
            before - self.points
        } else {
            0
        };

        Ok(HintOutcome {
            stage_id,
            hint,
            penalty_applied,
            first_view,
        })
    }

    /// Check `input` against the current stage's answer.
    ///
    /// On a match the stage's points are added and the session advances (or
    /// completes on the last stage). A mismatch changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished.
    pub fn submit_answer(
        &mut self,
        input: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<SubmitOutcome, SessionError> {
        self.ensure_active()?;
        let stage = self.current_stage();
        let stage_id = stage.id();

        if !stage.accepts(input) {
            return Ok(SubmitOutcome::Mismatch { stage_id });
        }

        let awarded = stage.points();
        let explanation = stage.explanation().to_owned();
        self.points = self.points.saturating_add(awarded);

        let advanced_to = if self.current < self.bank.len() {
            self.current += 1;
            self.draft.clear();
            Some(self.current)
        } else {
            self.completed_at = Some(answered_at);
            None
        };

        Ok(SubmitOutcome::Correct {
            stage_id,
            awarded,
            explanation,
            advanced_to,
            completed: self.is_complete(),
        })
    }

    /// Throw away all progress and begin again at stage 1.
    pub fn restart(&mut self, started_at: DateTime<Utc>) {
        self.current = 1;
        self.points = 0;
        self.hint_used.clear();
        self.draft.clear();
        self.started_at = started_at;
        self.completed_at = None;
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let stage_id = self.current_stage().id();
        SessionSnapshot {
            stage_index: self.current,
            stage_count: self.bank.len(),
            stage_id,
            points: self.points,
            max_points: self.bank.total_points(),
            is_complete: self.is_complete(),
            hint_used: self.hint_used(stage_id),
            draft: self.draft.clone(),
        }
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.is_complete() {
            Err(SessionError::Completed)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("stages_len", &self.bank.len())
            .field("current", &self.current)
            .field("points", &self.points)
            .field("hints_used", &self.hint_used.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
