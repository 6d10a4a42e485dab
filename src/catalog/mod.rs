//! Question catalog — localized question definitions and per-complaint
//! intake trees. Static clinical data consumed by the sequencer; the
//! engine never mutates it.

pub mod questions;
pub mod trees;

use serde::{Deserialize, Serialize};

use crate::models::{Language, QuestionCategory};

/// A prompt in both supported languages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bilingual {
    pub en: &'static str,
    pub ur: &'static str,
}

impl Bilingual {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.en,
            Language::Urdu => self.ur,
        }
    }
}

/// Expected answer shape — the validator keys off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKind {
    Severity,
    Duration,
    ChiefComplaint,
    Medication,
    YesNo,
    FreeText,
}

/// One localized question definition.
#[derive(Debug, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: Bilingual,
    pub kind: AnswerKind,
    pub category: QuestionCategory,
    /// A "yes" answer to a marked question records the id as a red flag.
    pub red_flag: bool,
}

/// Look up a base-catalog question by id.
pub fn find_question(id: &str) -> Option<&'static Question> {
    questions::QUESTIONS.iter().find(|q| q.id == id)
}
