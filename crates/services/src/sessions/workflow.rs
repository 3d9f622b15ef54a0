use std::sync::Arc;

use quiz_core::model::{HintOutcome, QuestionBank, Session, SessionSnapshot, SubmitOutcome};
use storage::StageSource;

use super::progress::CompletionSummary;
use crate::Clock;
use crate::error::QuizError;

/// Outcome of one user action together with the session state it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizStep<T> {
    pub outcome: T,
    pub snapshot: SessionSnapshot,
}

/// Owns the loaded question bank and applies user actions to sessions.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    bank: Arc<QuestionBank>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>) -> Self {
        Self { clock, bank }
    }

    /// Load the question bank once from `source`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Load` when the source is missing or malformed. The
    /// failure is terminal: callers must not render a stage.
    pub async fn load(clock: Clock, source: &dyn StageSource) -> Result<Self, QuizError> {
        let origin = source.describe();
        match source.load_stages().await {
            Ok(bank) => {
                tracing::info!(
                    source = %origin,
                    stages = bank.len(),
                    max_points = bank.total_points(),
                    "question bank loaded"
                );
                Ok(Self::new(clock, Arc::new(bank)))
            }
            Err(err) => {
                tracing::error!(source = %origin, error = %err, "question bank failed to load");
                Err(err.into())
            }
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// Start a new session at stage 1.
    #[must_use]
    pub fn start_session(&self) -> Session {
        let session = Session::start(self.bank(), self.clock.now());
        tracing::info!(stages = session.stage_count(), "session started");
        session
    }

    /// Show the current hint, charging the penalty on first view.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the session is already completed.
    pub fn view_hint(&self, session: &mut Session) -> Result<QuizStep<HintOutcome>, QuizError> {
        let outcome = session.view_hint()?;
        if outcome.first_view {
            tracing::info!(
                stage = %outcome.stage_id,
                penalty = outcome.penalty_applied,
                points = session.points(),
                "hint viewed"
            );
        } else {
            tracing::debug!(stage = %outcome.stage_id, "hint viewed again");
        }

        Ok(QuizStep {
            outcome,
            snapshot: session.snapshot(),
        })
    }

    /// Check an answer for the current stage.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the session is already completed.
    pub fn submit_answer(
        &self,
        session: &mut Session,
        input: &str,
    ) -> Result<QuizStep<SubmitOutcome>, QuizError> {
        let outcome = session.submit_answer(input, self.clock.now())?;
        match &outcome {
            SubmitOutcome::Correct {
                stage_id,
                awarded,
                completed,
                ..
            } => {
                tracing::info!(
                    stage = %stage_id,
                    awarded,
                    points = session.points(),
                    "answer accepted"
                );
                if *completed {
                    tracing::info!(
                        points = session.points(),
                        max_points = self.bank.total_points(),
                        hints_used = session.hints_used_count(),
                        "session completed"
                    );
                }
            }
            SubmitOutcome::Mismatch { stage_id } => {
                tracing::debug!(stage = %stage_id, "answer rejected");
            }
        }

        Ok(QuizStep {
            outcome,
            snapshot: session.snapshot(),
        })
    }

    /// Store the in-progress answer text.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the session is already completed.
    pub fn edit_draft(
        &self,
        session: &mut Session,
        text: impl Into<String>,
    ) -> Result<SessionSnapshot, QuizError> {
        session.set_draft(text)?;
        Ok(session.snapshot())
    }

    /// Drop all progress and go back to stage 1.
    pub fn restart(&self, session: &mut Session) -> SessionSnapshot {
        session.restart(self.clock.now());
        tracing::info!("session restarted");
        session.snapshot()
    }

    /// Final numbers once the session has completed.
    #[must_use]
    pub fn summary(&self, session: &Session) -> Option<CompletionSummary> {
        let elapsed = session.elapsed()?;
        Some(CompletionSummary {
            points: session.points(),
            max_points: session.bank().total_points(),
            stages: session.stage_count(),
            hints_used: session.hints_used_count(),
            elapsed,
        })
    }
}
