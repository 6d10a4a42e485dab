//! Narrative summarizer boundary. Talks to an external local LLM service
//! over HTTP and turns a completed intake transcript into a narrative
//! summary plus a four-part clinical note. The outside world is assumed
//! hostile here: every response field defaults rather than fails, the
//! request is bounded by a hard timeout, and at most one generation runs
//! per visit at a time.

pub mod client;
pub mod parser;
pub mod prompt;
pub mod service;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::{HttpSummarizer, SummaryGenerate};
pub use service::SummaryService;

#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Cannot reach summarizer at {0} — is the service running?")]
    Connection(String),

    #[error("Summarizer HTTP error: {0}")]
    Http(String),

    #[error("Summarizer returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Summary generation timed out after {0}s")]
    Timeout(u64),

    #[error("Malformed summarizer response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing failed: {0}")]
    JsonParsing(String),

    #[error("A summary is already in flight for visit {0}")]
    Busy(String),

    #[error("Summary task was canceled")]
    Canceled,

    #[error("Internal lock poisoned")]
    LockPoisoned,
}

/// SOAP-style note assembled from the model output. Every field is a
/// plain string so a half-filled response still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalNote {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

/// The advisory output of the summarizer. Never feeds back into triage
/// or phase flow; the deterministic engine has already ruled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeSummary {
    pub summary: String,
    pub suspected_condition: Option<String>,
    pub risk_level: Option<String>,
    /// Model self-reported confidence, clamped to 0.0..=1.0.
    pub confidence: f32,
    pub risks: Vec<String>,
    pub suggestions: Vec<String>,
    pub note: ClinicalNote,
}

impl NarrativeSummary {
    /// Baseline used when the model output is unusable: the caller
    /// falls back to the deterministic summary text.
    pub fn fallback(deterministic_summary: &str) -> Self {
        Self {
            summary: deterministic_summary.to_string(),
            suspected_condition: None,
            risk_level: None,
            confidence: 0.0,
            risks: Vec::new(),
            suggestions: Vec::new(),
            note: ClinicalNote::default(),
        }
    }
}
