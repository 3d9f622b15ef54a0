mod bank;
mod ids;
mod session;
mod stage;

pub use ids::{ParseStageIdError, StageId};

pub use bank::{QuestionBank, QuestionBankError};
pub use session::{
    FeedbackCue, HintOutcome, Session, SessionError, SessionSnapshot, SubmitOutcome,
};
pub use stage::{Difficulty, Stage, StageDraft, StageError};
