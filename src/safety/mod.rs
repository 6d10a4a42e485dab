//! Emergency / red-flag screen. Runs on every patient utterance before
//! any answer recording — an out-of-band interrupt, not a question-driven
//! check. A match halts the normal phase flow and is never silently
//! swallowed.

pub mod keywords;
pub mod options;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmergencyAction {
    Continue,
    StopAndEmergency,
}

/// The directive contract handed to the UI collaborator.
/// `StopAndEmergency` must disable further answer submission.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyDirective {
    pub action: EmergencyAction,
    /// Locale-keyed directive text, present only on a stop.
    pub message: Option<BTreeMap<&'static str, String>>,
    pub allow_continue: bool,
    /// The phrases or options that triggered the stop, verbatim.
    pub triggered: Vec<String>,
}

impl EmergencyDirective {
    fn proceed() -> Self {
        Self {
            action: EmergencyAction::Continue,
            message: None,
            allow_continue: true,
            triggered: Vec::new(),
        }
    }

    fn stop(triggered: Vec<String>) -> Self {
        let mut message = BTreeMap::new();
        message.insert(
            "en",
            format!(
                "Your answers suggest a possible emergency. Call {} or go to the \
                 nearest emergency department now. This intake cannot continue.",
                config::EMERGENCY_NUMBER
            ),
        );
        message.insert(
            "ur",
            format!(
                "آپ کے جوابات کسی ہنگامی صورتِ حال کی نشاندہی کرتے ہیں۔ فوراً {} پر کال کریں \
                 یا قریبی ایمرجنسی میں جائیں۔ یہ سوالنامہ جاری نہیں رہ سکتا۔",
                config::EMERGENCY_NUMBER
            ),
        );
        Self {
            action: EmergencyAction::StopAndEmergency,
            message: Some(message),
            allow_continue: false,
            triggered,
        }
    }

    pub fn is_stop(&self) -> bool {
        self.action == EmergencyAction::StopAndEmergency
    }
}

/// Scan free text for emergency phrases. Runs regardless of phase.
pub fn screen_free_text(text: &str) -> EmergencyDirective {
    let matched = keywords::scan(text);
    if matched.is_empty() {
        return EmergencyDirective::proceed();
    }
    tracing::warn!(phrases = ?matched, "Emergency phrase detected in patient text");
    EmergencyDirective::stop(matched.iter().map(|m| m.to_string()).collect())
}

/// Screen a checklist selection against the exact emergency option set.
pub fn screen_options(selected: &[String]) -> EmergencyDirective {
    let matched = options::match_selected(selected);
    if matched.is_empty() {
        return EmergencyDirective::proceed();
    }
    tracing::warn!(options = ?matched, "Emergency option selected");
    EmergencyDirective::stop(matched.iter().map(|m| m.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routine_text_continues() {
        let d = screen_free_text("mild ache in my knee after walking");
        assert_eq!(d.action, EmergencyAction::Continue);
        assert!(d.allow_continue);
        assert!(d.message.is_none());
    }

    #[test]
    fn severe_chest_pain_stops() {
        let d = screen_free_text("I have severe chest pain since this morning");
        assert_eq!(d.action, EmergencyAction::StopAndEmergency);
        assert!(!d.allow_continue);
        assert!(d.triggered.iter().any(|t| t.contains("chest pain")));
    }

    #[test]
    fn stop_directive_is_bilingual_and_names_1122() {
        let d = screen_free_text("severe chest pain");
        let msg = d.message.unwrap();
        assert!(msg["en"].contains("1122"));
        assert!(msg["ur"].contains("1122"));
    }

    #[test]
    fn emergency_option_selection_stops() {
        let selected = vec!["Difficulty breathing".to_string()];
        let d = screen_options(&selected);
        assert!(d.is_stop());
    }

    #[test]
    fn non_emergency_options_continue() {
        let selected = vec!["Mild itching".to_string(), "Dry cough".to_string()];
        let d = screen_options(&selected);
        assert!(!d.is_stop());
    }
}
