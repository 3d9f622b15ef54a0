use std::sync::Arc;

use quiz_core::model::{Difficulty, FeedbackCue, Session, SessionSnapshot, SubmitOutcome};
use services::{CompletionSummary, QuizLoopService};

use super::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameIntent {
    EditDraft(String),
    ShowHint,
    Submit,
    Restart,
}

/// Message shown under the answer buttons after the last action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Hint { text: String, penalty: u32 },
    Correct { awarded: u32, explanation: String },
    Wrong,
}

impl Feedback {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Feedback::Hint { .. } => "feedback feedback-hint",
            Feedback::Correct { .. } => "feedback feedback-success",
            Feedback::Wrong => "feedback feedback-error",
        }
    }

    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            Feedback::Hint { text, .. } => text.clone(),
            Feedback::Correct { explanation, .. } => format!("Correct! {explanation}"),
            Feedback::Wrong => "Oops, not quite. Give it another try!".to_string(),
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Feedback::Hint { penalty, .. } if *penalty > 0 => {
                Some(format!("Using the hint cost you {penalty} points."))
            }
            Feedback::Correct { awarded, .. } => Some(format!("+{awarded} points")),
            _ => None,
        }
    }
}

/// Display data for the stage card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageCardVm {
    pub level: u64,
    pub title: String,
    pub question: String,
    pub difficulty: Difficulty,
    pub points: u32,
}

/// Play-screen state: one session plus the feedback from the latest action.
pub struct GameVm {
    service: Arc<QuizLoopService>,
    session: Session,
    feedback: Option<Feedback>,
}

impl GameVm {
    #[must_use]
    pub fn start(service: Arc<QuizLoopService>) -> Self {
        let session = service.start_session();
        Self {
            service,
            session,
            feedback: None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        self.session.draft()
    }

    #[must_use]
    pub fn stage_card(&self) -> StageCardVm {
        let stage = self.session.current_stage();
        StageCardVm {
            level: stage.id().value(),
            title: stage.title().to_string(),
            question: stage.question().to_string(),
            difficulty: stage.difficulty(),
            points: stage.points(),
        }
    }

    #[must_use]
    pub fn preview_html(&self) -> Option<String> {
        let draft = self.session.draft();
        if draft.trim().is_empty() {
            None
        } else {
            Some(markdown_to_html(draft))
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<CompletionSummary> {
        self.service.summary(&self.session)
    }

    /// Apply an intent and return the cue the view should play, if any.
    pub fn dispatch(&mut self, intent: GameIntent) -> Option<FeedbackCue> {
        match intent {
            GameIntent::EditDraft(text) => {
                if let Err(err) = self.service.edit_draft(&mut self.session, text) {
                    tracing::warn!(error = %err, "draft edit ignored");
                }
                None
            }
            GameIntent::ShowHint => match self.service.view_hint(&mut self.session) {
                Ok(step) => {
                    let cue = step.outcome.cue();
                    self.feedback = Some(Feedback::Hint {
                        text: step.outcome.hint,
                        penalty: step.outcome.penalty_applied,
                    });
                    Some(cue)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "hint request ignored");
                    None
                }
            },
            GameIntent::Submit => {
                let input = self.session.draft().to_string();
                match self.service.submit_answer(&mut self.session, &input) {
                    Ok(step) => {
                        let cue = step.outcome.cue();
                        self.feedback = Some(match step.outcome {
                            SubmitOutcome::Correct {
                                awarded,
                                explanation,
                                ..
                            } => Feedback::Correct {
                                awarded,
                                explanation,
                            },
                            SubmitOutcome::Mismatch { .. } => Feedback::Wrong,
                        });
                        Some(cue)
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "answer ignored");
                        None
                    }
                }
            }
            GameIntent::Restart => {
                self.service.restart(&mut self.session);
                self.feedback = None;
                Some(FeedbackCue::Start)
            }
        }
    }
}
