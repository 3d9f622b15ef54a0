#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{BUNDLED_STAGES, BundledStageSource, FileStageSource, parse_question_bank};
pub use repository::{InMemoryStageSource, StageSource, StorageError};
