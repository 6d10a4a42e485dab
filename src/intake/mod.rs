pub mod engine;
pub mod validator;

pub use engine::{IntakeEngine, NextQuestion, Progress, SubmitOutcome};
pub use validator::{validate, ValidationErrorCode, ValidationOutcome};

use thiserror::Error;

use crate::models::ModelError;

#[derive(Error, Debug)]
pub enum IntakeError {
    /// Programmer error — the id is outside the known catalog and the
    /// session's merged refinements. Never surfaced to the patient.
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Session is complete; no further answers accepted")]
    SessionComplete,

    #[error(transparent)]
    Model(#[from] ModelError),
}
