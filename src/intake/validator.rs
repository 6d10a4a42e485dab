//! Field-level response validation. Pure functions of their inputs so
//! the same checks are reusable from synchronous and asynchronous call
//! sites without shared state.

use serde::{Deserialize, Serialize};

use crate::catalog::AnswerKind;
use crate::config;

/// Stable error codes surfaced to the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorCode {
    NotANumber,
    OutOfRange,
    TooShort,
    TooVague,
    MissingTimeReference,
    InvalidYesNo,
    Empty,
}

impl ValidationErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotANumber => "NOT_A_NUMBER",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::TooShort => "TOO_SHORT",
            Self::TooVague => "TOO_VAGUE",
            Self::MissingTimeReference => "MISSING_TIME_REFERENCE",
            Self::InvalidYesNo => "INVALID_YES_NO",
            Self::Empty => "EMPTY",
        }
    }
}

/// Outcome of validating one raw answer.
#[derive(Debug, Clone, Serialize)]
pub enum ValidationOutcome {
    Accepted {
        sanitized: String,
    },
    /// Recoverable — the UI re-prompts with the suggestions; the engine
    /// never retries on its own and the phase does not advance.
    Rejected {
        code: ValidationErrorCode,
        /// Localized hints, English first then Urdu.
        suggestions: Vec<String>,
    },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn sanitized(&self) -> Option<&str> {
        match self {
            Self::Accepted { sanitized } => Some(sanitized),
            Self::Rejected { .. } => None,
        }
    }

    pub fn error_code(&self) -> Option<ValidationErrorCode> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { code, .. } => Some(*code),
        }
    }

    fn reject(code: ValidationErrorCode) -> Self {
        Self::Rejected {
            suggestions: suggestions_for(code),
            code,
        }
    }
}

/// Recognized time-unit tokens in either language (substring match).
const TIME_TOKENS: &[&str] = &[
    "minute", "min", "hour", "hr", "day", "week", "month", "year", "ago", "since", "yesterday",
    "morning", "night", "منٹ", "گھنٹ", "دن", "ہفت", "مہین", "سال", "پہلے", "سے", "رات", "صبح", "کل",
];

/// Vague phrasings rejected for chief complaints under the length ceiling.
const VAGUE_TERMS: &[&str] = &[
    "pain", "hurt", "sick", "unwell", "ill", "bad", "not well", "درد", "تکلیف", "بیمار", "طبیعت",
];

const YES_TOKENS: &[&str] = &[
    "yes", "y", "yeah", "yep", "haan", "han", "ji", "ji haan", "ہاں", "جی", "جی ہاں",
];

const NO_TOKENS: &[&str] = &["no", "n", "nope", "nahi", "nahin", "ji nahi", "نہیں", "جی نہیں"];

/// "None" synonyms normalized for medication answers.
const NONE_TOKENS: &[&str] = &[
    "none", "no", "nothing", "nil", "n/a", "na", "koi nahi", "kuch nahi", "کوئی نہیں", "کچھ نہیں",
    "نہیں",
];

/// Check and normalize a raw answer against the field's expected shape.
pub fn validate(kind: AnswerKind, raw: &str) -> ValidationOutcome {
    let trimmed = raw.trim();
    match kind {
        AnswerKind::Severity => validate_severity(trimmed),
        AnswerKind::Duration => validate_duration(trimmed),
        AnswerKind::ChiefComplaint => validate_chief_complaint(trimmed),
        AnswerKind::Medication => validate_medication(trimmed),
        AnswerKind::YesNo => validate_yes_no(trimmed),
        AnswerKind::FreeText => validate_non_empty(trimmed),
    }
}

fn validate_severity(input: &str) -> ValidationOutcome {
    let Ok(n) = input.parse::<i64>() else {
        return ValidationOutcome::reject(ValidationErrorCode::NotANumber);
    };
    if !(config::SEVERITY_MIN..=config::SEVERITY_MAX).contains(&n) {
        return ValidationOutcome::reject(ValidationErrorCode::OutOfRange);
    }
    ValidationOutcome::Accepted {
        sanitized: n.to_string(),
    }
}

fn validate_duration(input: &str) -> ValidationOutcome {
    if input.chars().count() < config::MIN_DURATION_LEN {
        return ValidationOutcome::reject(ValidationErrorCode::TooShort);
    }
    let lower = input.to_lowercase();
    if !TIME_TOKENS.iter().any(|t| lower.contains(t)) {
        return ValidationOutcome::reject(ValidationErrorCode::MissingTimeReference);
    }
    ValidationOutcome::Accepted {
        sanitized: input.to_string(),
    }
}

fn validate_chief_complaint(input: &str) -> ValidationOutcome {
    let len = input.chars().count();
    if len < config::MIN_COMPLAINT_LEN {
        return ValidationOutcome::reject(ValidationErrorCode::TooShort);
    }
    let lower = input.to_lowercase();
    if len <= config::VAGUE_COMPLAINT_CEILING && VAGUE_TERMS.iter().any(|t| lower.contains(t)) {
        return ValidationOutcome::reject(ValidationErrorCode::TooVague);
    }
    ValidationOutcome::Accepted {
        sanitized: input.to_string(),
    }
}

fn validate_medication(input: &str) -> ValidationOutcome {
    if input.is_empty() {
        return ValidationOutcome::reject(ValidationErrorCode::Empty);
    }
    let lower = input.to_lowercase();
    if NONE_TOKENS.iter().any(|t| *t == lower) {
        return ValidationOutcome::Accepted {
            sanitized: "none".to_string(),
        };
    }
    ValidationOutcome::Accepted {
        sanitized: input.to_string(),
    }
}

fn validate_yes_no(input: &str) -> ValidationOutcome {
    let lower = input.to_lowercase();
    if YES_TOKENS.iter().any(|t| *t == lower) {
        return ValidationOutcome::Accepted {
            sanitized: "yes".to_string(),
        };
    }
    if NO_TOKENS.iter().any(|t| *t == lower) {
        return ValidationOutcome::Accepted {
            sanitized: "no".to_string(),
        };
    }
    ValidationOutcome::reject(ValidationErrorCode::InvalidYesNo)
}

fn validate_non_empty(input: &str) -> ValidationOutcome {
    if input.is_empty() {
        return ValidationOutcome::reject(ValidationErrorCode::Empty);
    }
    ValidationOutcome::Accepted {
        sanitized: input.to_string(),
    }
}

/// Localized re-prompt hints, English then Urdu.
fn suggestions_for(code: ValidationErrorCode) -> Vec<String> {
    let (en, ur) = match code {
        ValidationErrorCode::NotANumber => (
            "Please enter a number between 0 and 10.",
            "براہ کرم صفر سے دس تک کوئی عدد لکھیں۔",
        ),
        ValidationErrorCode::OutOfRange => (
            "The number must be between 0 and 10.",
            "عدد صفر اور دس کے درمیان ہونا چاہیے۔",
        ),
        ValidationErrorCode::TooShort => (
            "Please give a little more detail.",
            "براہ کرم کچھ مزید تفصیل بتائیں۔",
        ),
        ValidationErrorCode::TooVague => (
            "Please describe where it hurts and what it feels like.",
            "براہ کرم بتائیں کہ تکلیف کہاں ہے اور کیسی محسوس ہوتی ہے۔",
        ),
        ValidationErrorCode::MissingTimeReference => (
            "Include when it started, for example '3 days ago'.",
            "یہ بتائیں کہ کب شروع ہوا، مثلاً 'تین دن پہلے'۔",
        ),
        ValidationErrorCode::InvalidYesNo => (
            "Please answer yes or no.",
            "براہ کرم ہاں یا نہیں میں جواب دیں۔",
        ),
        ValidationErrorCode::Empty => (
            "This answer cannot be empty.",
            "جواب خالی نہیں ہو سکتا۔",
        ),
    };
    vec![en.to_string(), ur.to_string()]
}
