pub mod enums;
pub mod session;

pub use enums::{
    BodyRegion, BodySide, ComplaintType, IntakePhase, Language, QuestionCategory, UrgencyLevel,
};
pub use session::IntakeSession;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidEnum { field: String, value: String },

    #[error("Session {0} is complete and can no longer be mutated")]
    SessionComplete(String),

    #[error("Body location already registered for session {0}")]
    BodyLocationAlreadySet(String),
}
