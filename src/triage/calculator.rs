//! Clinical triage calculation. Rules evaluate in a fixed priority
//! order and the first match wins; everything here is derived from the
//! session on demand, never stored back on it.

use serde::Serialize;

use crate::models::{BodyRegion, BodySide, ComplaintType, IntakeSession, UrgencyLevel};

/// The urgency decision with human-readable reasoning for the provider.
#[derive(Debug, Clone, Serialize)]
pub struct TriageOutcome {
    pub level: UrgencyLevel,
    pub reasoning: String,
}

/// Combine complaint, body location, and collected answers into an
/// urgency level. Priority: red flags, then complaint-and-region
/// composites, then generic severity bands.
pub fn calculate_triage(session: &IntakeSession) -> TriageOutcome {
    // 1. Any red flag forces the top of the scale.
    if !session.red_flags().is_empty() {
        let outcome = TriageOutcome {
            level: UrgencyLevel::Immediate,
            reasoning: format!("Red flags present: {}", session.red_flags().join(", ")),
        };
        tracing::warn!(
            visit_id = session.visit_id(),
            flags = ?session.red_flags(),
            "Triage: red flags force immediate review"
        );
        return outcome;
    }

    // 2. Complaint-and-region composite rules.
    if let Some(outcome) = composite_rule(session) {
        tracing::info!(
            visit_id = session.visit_id(),
            level = outcome.level.as_str(),
            "Triage: composite rule fired"
        );
        return outcome;
    }

    // 3. Generic severity bands.
    severity_band(session)
}

fn composite_rule(session: &IntakeSession) -> Option<TriageOutcome> {
    let complaint = session.complaint();
    let region = session.body_region();
    let severity = severity_answer(session);

    if complaint == ComplaintType::ChestPain && region == Some(BodyRegion::Chest) {
        if severity.is_some_and(|s| s >= 7) {
            return Some(TriageOutcome {
                level: UrgencyLevel::Immediate,
                reasoning: format!(
                    "Chest pain localized to the chest with severity {}/10 — cardiac concern",
                    severity.unwrap_or_default()
                ),
            });
        }
        return Some(TriageOutcome {
            level: UrgencyLevel::Urgent,
            reasoning: "Chest pain localized to the chest region".to_string(),
        });
    }

    if complaint == ComplaintType::AbdominalPain
        && region == Some(BodyRegion::LowerAbdomen)
        && session.body_side() == Some(BodySide::Right)
        && session.answered_yes("q_nausea")
    {
        return Some(TriageOutcome {
            level: UrgencyLevel::Urgent,
            reasoning: "Right lower abdominal pain with nausea — appendicitis concern".to_string(),
        });
    }

    if complaint == ComplaintType::BackPain
        && region == Some(BodyRegion::LowerBack)
        && (session.answered_yes("qr_saddle_numbness")
            || session.answered_yes("qr_bladder_control")
            || session.answered_yes("q_leg_weakness"))
    {
        return Some(TriageOutcome {
            level: UrgencyLevel::Urgent,
            reasoning: "Lower back pain with neurological symptoms — cauda equina concern"
                .to_string(),
        });
    }

    None
}

fn severity_band(session: &IntakeSession) -> TriageOutcome {
    match severity_answer(session) {
        Some(s) if s >= 8 => TriageOutcome {
            level: UrgencyLevel::Urgent,
            reasoning: format!("Reported severity {s}/10"),
        },
        Some(s) if s >= 5 => TriageOutcome {
            level: UrgencyLevel::SemiUrgent,
            reasoning: format!("Reported severity {s}/10"),
        },
        Some(s) => TriageOutcome {
            level: UrgencyLevel::NonUrgent,
            reasoning: format!("Reported severity {s}/10"),
        },
        // No clinical answers at all: informational review only.
        None if session.answers().is_empty() => TriageOutcome {
            level: UrgencyLevel::Informational,
            reasoning: "No clinical answers recorded".to_string(),
        },
        None => TriageOutcome {
            level: UrgencyLevel::NonUrgent,
            reasoning: "No severity rating recorded".to_string(),
        },
    }
}

fn severity_answer(session: &IntakeSession) -> Option<i64> {
    session.answer("q_severity").and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(complaint: ComplaintType) -> IntakeSession {
        IntakeSession::new("v-1", "p-1", complaint)
    }

    fn record(s: &mut IntakeSession, id: &str, value: &str) {
        s.record(id, value).unwrap();
    }

    // ── Rule 1: red flags ────────────────────────────────

    #[test]
    fn red_flags_force_immediate() {
        let mut s = session(ComplaintType::General);
        s.add_red_flag("chest pain");
        s.add_red_flag("qr_diaphoresis");
        let out = calculate_triage(&s);
        assert_eq!(out.level, UrgencyLevel::Immediate);
        assert!(out.reasoning.contains("chest pain"));
        assert!(out.reasoning.contains("qr_diaphoresis"));
    }

    #[test]
    fn red_flags_outrank_low_severity() {
        let mut s = session(ComplaintType::General);
        record(&mut s, "q_severity", "2");
        s.add_red_flag("q_consciousness");
        assert_eq!(calculate_triage(&s).level, UrgencyLevel::Immediate);
    }

    // ── Rule 2: composites ───────────────────────────────

    #[test]
    fn chest_pain_chest_region_severity_eight_is_immediate() {
        let mut s = session(ComplaintType::ChestPain);
        s.set_body_location(BodyRegion::Chest, None).unwrap();
        record(&mut s, "q_severity", "8");
        let out = calculate_triage(&s);
        assert_eq!(out.level, UrgencyLevel::Immediate);
        assert!(out.reasoning.contains("8/10"));
    }

    #[test]
    fn chest_pain_chest_region_low_severity_is_urgent() {
        let mut s = session(ComplaintType::ChestPain);
        s.set_body_location(BodyRegion::Chest, None).unwrap();
        record(&mut s, "q_severity", "4");
        assert_eq!(calculate_triage(&s).level, UrgencyLevel::Urgent);
    }

    #[test]
    fn right_lower_abdomen_with_nausea_is_urgent_appendicitis() {
        let mut s = session(ComplaintType::AbdominalPain);
        s.set_body_location(BodyRegion::LowerAbdomen, Some(BodySide::Right))
            .unwrap();
        record(&mut s, "q_nausea", "yes");
        let out = calculate_triage(&s);
        assert_eq!(out.level, UrgencyLevel::Urgent);
        assert!(out.reasoning.contains("appendicitis"));
    }

    #[test]
    fn right_lower_abdomen_without_nausea_falls_to_bands() {
        let mut s = session(ComplaintType::AbdominalPain);
        s.set_body_location(BodyRegion::LowerAbdomen, Some(BodySide::Right))
            .unwrap();
        record(&mut s, "q_nausea", "no");
        record(&mut s, "q_severity", "3");
        assert_eq!(calculate_triage(&s).level, UrgencyLevel::NonUrgent);
    }

    #[test]
    fn lower_back_with_bladder_loss_is_urgent_cauda_equina() {
        let mut s = session(ComplaintType::BackPain);
        s.set_body_location(BodyRegion::LowerBack, None).unwrap();
        record(&mut s, "qr_bladder_control", "yes");
        let out = calculate_triage(&s);
        assert_eq!(out.level, UrgencyLevel::Urgent);
        assert!(out.reasoning.contains("cauda equina"));
    }

    // ── Rule 3: severity bands ───────────────────────────

    #[test]
    fn severity_bands() {
        for (sev, expected) in [
            ("9", UrgencyLevel::Urgent),
            ("8", UrgencyLevel::Urgent),
            ("6", UrgencyLevel::SemiUrgent),
            ("5", UrgencyLevel::SemiUrgent),
            ("4", UrgencyLevel::NonUrgent),
            ("0", UrgencyLevel::NonUrgent),
        ] {
            let mut s = session(ComplaintType::General);
            record(&mut s, "q_severity", sev);
            assert_eq!(calculate_triage(&s).level, expected, "severity {sev}");
        }
    }

    #[test]
    fn empty_session_is_informational() {
        let s = session(ComplaintType::General);
        assert_eq!(calculate_triage(&s).level, UrgencyLevel::Informational);
    }

    #[test]
    fn answers_without_severity_are_non_urgent() {
        let mut s = session(ComplaintType::General);
        record(&mut s, "q_fever", "no");
        assert_eq!(calculate_triage(&s).level, UrgencyLevel::NonUrgent);
    }

    #[test]
    fn recomputation_is_stable() {
        let mut s = session(ComplaintType::ChestPain);
        s.set_body_location(BodyRegion::Chest, None).unwrap();
        record(&mut s, "q_severity", "8");
        let a = calculate_triage(&s);
        let b = calculate_triage(&s);
        assert_eq!(a.level, b.level);
        assert_eq!(a.reasoning, b.reasoning);
    }
}
