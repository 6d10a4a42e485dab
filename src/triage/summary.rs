//! Deterministic provider-facing output: the line-oriented summary the
//! clinician reads, plus the transcript and baseline-context strings
//! handed to the narrative summarizer. No AI involvement — always
//! available even when the summarizer collaborator is unreachable.

use crate::catalog;
use crate::models::{BodyRegion, BodySide, ComplaintType, IntakeSession};
use crate::triage::refiner;

/// Associated-symptom flags surfaced in the summary when answered "yes".
const ASSOCIATED_FLAGS: &[(&str, &str)] = &[
    ("q_nausea", "nausea"),
    ("q_fever", "fever"),
    ("qr_fever", "fever"),
    ("qr_diaphoresis", "sweating"),
    ("q_breathing_difficulty", "breathing difficulty"),
    ("q_leg_weakness", "leg weakness"),
    ("q_vision", "vision changes"),
    ("qr_swelling_warmth", "limb swelling or warmth"),
];

fn complaint_label(complaint: ComplaintType) -> &'static str {
    match complaint {
        ComplaintType::ChestPain => "Chest pain",
        ComplaintType::AbdominalPain => "Abdominal pain",
        ComplaintType::BackPain => "Back pain",
        ComplaintType::LimbPain => "Limb pain",
        ComplaintType::Headache => "Headache",
        ComplaintType::General => "General complaint",
    }
}

fn region_label(region: BodyRegion) -> String {
    region.as_str().replace('_', " ")
}

fn location_label(region: BodyRegion, side: Option<BodySide>) -> String {
    match side {
        Some(side) => format!("{} {}", side.as_str(), region_label(region)),
        None => region_label(region),
    }
}

/// Compose the provider brief. Complaint is always present; location,
/// onset, severity, associated flags, and red flags appear when the
/// session carries them.
pub fn generate_summary(session: &IntakeSession) -> String {
    let mut lines = vec![format!("Complaint: {}", complaint_label(session.complaint()))];

    if let Some(region) = session.body_region() {
        lines.push(format!(
            "Location: {}",
            location_label(region, session.body_side())
        ));
    }
    if let Some(onset) = session.answer("q_onset") {
        lines.push(format!("Onset: {onset}"));
    }
    if let Some(severity) = session.answer("q_severity") {
        lines.push(format!("Severity: {severity}/10"));
    }

    let mut associated: Vec<&str> = Vec::new();
    for (id, label) in ASSOCIATED_FLAGS {
        if session.answered_yes(id) && !associated.contains(label) {
            associated.push(label);
        }
    }
    if !associated.is_empty() {
        lines.push(format!("Associated: {}", associated.join(", ")));
    }

    if !session.red_flags().is_empty() {
        lines.push(format!("Red flags: {}", session.red_flags().join(", ")));
    }

    lines.join("\n")
}

/// Question-and-answer transcript for the narrative summarizer, in
/// audit order. English prompts; unresolvable ids fall back to the id.
pub fn build_transcript(session: &IntakeSession) -> String {
    session
        .answers()
        .iter()
        .map(|a| {
            let prompt = catalog::find_question(&a.question_id)
                .or_else(|| refiner::find_refined(&a.question_id))
                .map(|q| q.prompt.en)
                .unwrap_or(a.question_id.as_str());
            format!("Q: {prompt}\nA: {}", a.value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Baseline context string sent alongside the transcript.
pub fn baseline_context(session: &IntakeSession) -> String {
    let mut parts = vec![format!("complaint={}", session.complaint().as_str())];
    if let Some(region) = session.body_region() {
        parts.push(format!(
            "location={}",
            location_label(region, session.body_side())
        ));
    }
    if !session.red_flags().is_empty() {
        parts.push(format!("red_flags={}", session.red_flags().join("|")));
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_session() -> IntakeSession {
        let mut s = IntakeSession::new("v-1", "p-1", ComplaintType::AbdominalPain);
        s.set_body_location(BodyRegion::LowerAbdomen, Some(BodySide::Right))
            .unwrap();
        s.record("q_onset", "2 days ago").unwrap();
        s.record("q_severity", "6").unwrap();
        s.record("q_nausea", "yes").unwrap();
        s
    }

    #[test]
    fn summary_always_includes_complaint_line() {
        let s = IntakeSession::new("v-1", "p-1", ComplaintType::ChestPain);
        let summary = generate_summary(&s);
        assert!(summary.starts_with("Complaint: Chest pain"));
    }

    #[test]
    fn location_line_has_side_prefixed_to_region() {
        let summary = generate_summary(&full_session());
        assert!(summary.contains("Location: right lower abdomen"));
    }

    #[test]
    fn location_without_side_is_region_only() {
        let mut s = IntakeSession::new("v-1", "p-1", ComplaintType::BackPain);
        s.set_body_location(BodyRegion::LowerBack, None).unwrap();
        assert!(generate_summary(&s).contains("Location: lower back"));
    }

    #[test]
    fn onset_severity_and_associated_present() {
        let summary = generate_summary(&full_session());
        assert!(summary.contains("Onset: 2 days ago"));
        assert!(summary.contains("Severity: 6/10"));
        assert!(summary.contains("Associated: nausea"));
    }

    #[test]
    fn red_flags_listed_when_present() {
        let mut s = full_session();
        s.add_red_flag("qr_rebound");
        assert!(generate_summary(&s).contains("Red flags: qr_rebound"));
    }

    #[test]
    fn optional_lines_absent_when_unanswered() {
        let s = IntakeSession::new("v-1", "p-1", ComplaintType::General);
        let summary = generate_summary(&s);
        assert!(!summary.contains("Onset:"));
        assert!(!summary.contains("Severity:"));
        assert!(!summary.contains("Associated:"));
        assert!(!summary.contains("Red flags:"));
    }

    #[test]
    fn duplicate_associated_labels_collapse() {
        let mut s = IntakeSession::new("v-1", "p-1", ComplaintType::General);
        s.record("q_fever", "yes").unwrap();
        s.record("qr_fever", "yes").unwrap();
        let summary = generate_summary(&s);
        assert_eq!(summary.matches("fever").count(), 1);
    }

    #[test]
    fn transcript_pairs_prompts_with_answers_in_order() {
        let transcript = build_transcript(&full_session());
        assert!(transcript.contains("Q: When did this problem start?\nA: 2 days ago"));
        let onset = transcript.find("When did this problem start").unwrap();
        let nausea = transcript.find("nauseous").unwrap();
        assert!(onset < nausea);
    }

    #[test]
    fn transcript_falls_back_to_unknown_id() {
        let mut s = IntakeSession::new("v-1", "p-1", ComplaintType::General);
        s.record("q_legacy_field", "something").unwrap();
        assert!(build_transcript(&s).contains("Q: q_legacy_field"));
    }

    #[test]
    fn baseline_context_carries_complaint_and_location() {
        let ctx = baseline_context(&full_session());
        assert!(ctx.contains("complaint=abdominal_pain"));
        assert!(ctx.contains("location=right lower abdomen"));
    }
}
