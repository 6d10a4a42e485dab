use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

use super::enums::{BodyRegion, BodySide, ComplaintType, IntakePhase};
use super::ModelError;
use crate::catalog::Question;

/// One answered question, in audit order.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedAnswer {
    pub question_id: String,
    pub value: String,
}

/// The unit of work for one patient encounter.
///
/// Fields are private so the invariants hold by construction: the phase
/// only moves forward, `answers` keys stay unique in insertion order,
/// `asked` and `red_flags` are append-only, the body location is set at
/// most once, and nothing mutates after the phase reaches Complete.
/// Mutation goes through the intake engine.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeSession {
    visit_id: String,
    patient_id: String,
    complaint: ComplaintType,
    phase: IntakePhase,
    answers: Vec<RecordedAnswer>,
    asked: Vec<String>,
    body_region: Option<BodyRegion>,
    body_side: Option<BodySide>,
    /// Region-specific follow-ups merged in by the refiner, once.
    refined: Vec<&'static Question>,
    red_flags: Vec<String>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl IntakeSession {
    /// Create a session with externally assigned identifiers.
    pub fn new(visit_id: &str, patient_id: &str, complaint: ComplaintType) -> Self {
        let now = Local::now().naive_local();
        Self {
            visit_id: visit_id.to_string(),
            patient_id: patient_id.to_string(),
            complaint,
            phase: IntakePhase::Safety,
            answers: Vec::new(),
            asked: Vec::new(),
            body_region: None,
            body_side: None,
            refined: Vec::new(),
            red_flags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Convenience constructor for callers without an upstream visit id.
    pub fn start(patient_id: &str, complaint: ComplaintType) -> Self {
        Self::new(&Uuid::new_v4().to_string(), patient_id, complaint)
    }

    // ── Read accessors ───────────────────────────────────

    pub fn visit_id(&self) -> &str {
        &self.visit_id
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn complaint(&self) -> ComplaintType {
        self.complaint
    }

    pub fn phase(&self) -> IntakePhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == IntakePhase::Complete
    }

    /// Answers in audit (insertion) order.
    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    /// Normalized value for a question id, if answered.
    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.value.as_str())
    }

    pub fn has_answered(&self, question_id: &str) -> bool {
        self.answer(question_id).is_some()
    }

    /// Whether the stored answer for a yes/no question is canonical "yes".
    pub fn answered_yes(&self, question_id: &str) -> bool {
        self.answer(question_id) == Some("yes")
    }

    /// Ids presented to the patient, in presentation order. A presented
    /// question stays here even if its answer was rejected or never came.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn body_region(&self) -> Option<BodyRegion> {
        self.body_region
    }

    pub fn body_side(&self) -> Option<BodySide> {
        self.body_side
    }

    pub fn refined_questions(&self) -> &[&'static Question] {
        &self.refined
    }

    pub fn red_flags(&self) -> &[String] {
        &self.red_flags
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    // ── Mutators (engine-only) ───────────────────────────

    fn touch(&mut self) {
        self.updated_at = Local::now().naive_local();
    }

    fn ensure_mutable(&self) -> Result<(), ModelError> {
        if self.is_complete() {
            return Err(ModelError::SessionComplete(self.visit_id.clone()));
        }
        Ok(())
    }

    /// Append a normalized answer. Re-answering an id updates the value
    /// in place so answer keys stay unique in first-answer order.
    pub(crate) fn record(&mut self, question_id: &str, value: &str) -> Result<(), ModelError> {
        self.ensure_mutable()?;
        match self.answers.iter_mut().find(|a| a.question_id == question_id) {
            Some(existing) => existing.value = value.to_string(),
            None => self.answers.push(RecordedAnswer {
                question_id: question_id.to_string(),
                value: value.to_string(),
            }),
        }
        if !self.asked.iter().any(|q| q == question_id) {
            self.asked.push(question_id.to_string());
        }
        self.touch();
        Ok(())
    }

    /// Note that a question was presented, whether or not an answer
    /// ever arrives. Deduplicated.
    pub(crate) fn mark_asked(&mut self, question_id: &str) {
        if !self.asked.iter().any(|q| q == question_id) {
            self.asked.push(question_id.to_string());
            self.touch();
        }
    }

    /// Move to the next phase. No-op once Complete.
    pub(crate) fn advance_phase(&mut self) {
        if self.is_complete() {
            return;
        }
        self.phase = self.phase.next();
        self.touch();
    }

    /// Jump directly to the terminal phase (emergency interrupt).
    pub(crate) fn force_complete(&mut self) {
        if self.is_complete() {
            return;
        }
        self.phase = IntakePhase::Complete;
        self.touch();
    }

    /// Red flags accumulate and are never cleared.
    pub(crate) fn add_red_flag(&mut self, flag: &str) {
        if !self.red_flags.iter().any(|f| f == flag) {
            self.red_flags.push(flag.to_string());
            self.touch();
        }
    }

    /// Register the body location. Allowed at most once per session.
    pub(crate) fn set_body_location(
        &mut self,
        region: BodyRegion,
        side: Option<BodySide>,
    ) -> Result<(), ModelError> {
        self.ensure_mutable()?;
        if self.body_region.is_some() {
            return Err(ModelError::BodyLocationAlreadySet(self.visit_id.clone()));
        }
        self.body_region = Some(region);
        self.body_side = side;
        self.touch();
        Ok(())
    }

    /// Merge refiner output into the session's question stream.
    pub(crate) fn merge_refined(&mut self, questions: Vec<&'static Question>) {
        for q in questions {
            if !self.refined.iter().any(|r| r.id == q.id) {
                self.refined.push(q);
            }
        }
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> IntakeSession {
        IntakeSession::new("v-1", "p-1", ComplaintType::ChestPain)
    }

    #[test]
    fn new_session_starts_in_safety() {
        let s = session();
        assert_eq!(s.phase(), IntakePhase::Safety);
        assert!(s.answers().is_empty());
        assert!(s.red_flags().is_empty());
        assert!(!s.is_complete());
    }

    #[test]
    fn record_appends_to_answers_and_asked() {
        let mut s = session();
        s.record("q_severity", "7").unwrap();
        assert_eq!(s.answer("q_severity"), Some("7"));
        assert_eq!(s.asked(), &["q_severity".to_string()]);
    }

    #[test]
    fn reanswer_updates_in_place_keeps_order() {
        let mut s = session();
        s.record("q_a", "1").unwrap();
        s.record("q_b", "2").unwrap();
        s.record("q_a", "3").unwrap();
        assert_eq!(s.answers().len(), 2);
        assert_eq!(s.answers()[0].question_id, "q_a");
        assert_eq!(s.answer("q_a"), Some("3"));
        assert_eq!(s.asked().len(), 2);
    }

    #[test]
    fn every_answered_id_appears_in_asked() {
        let mut s = session();
        for (id, v) in [("q_a", "x"), ("q_b", "y"), ("q_c", "z")] {
            s.record(id, v).unwrap();
        }
        for a in s.answers() {
            assert!(s.asked().iter().any(|q| *q == a.question_id));
        }
    }

    #[test]
    fn mark_asked_audits_without_answering() {
        let mut s = session();
        s.mark_asked("q_severity");
        s.mark_asked("q_severity");
        assert_eq!(s.asked(), &["q_severity".to_string()]);
        assert!(!s.has_answered("q_severity"));
    }

    #[test]
    fn phase_never_regresses() {
        let mut s = session();
        s.advance_phase();
        assert_eq!(s.phase(), IntakePhase::Diagnostic);
        s.advance_phase();
        s.advance_phase();
        assert_eq!(s.phase(), IntakePhase::Complete);
        // Terminal — further advances are no-ops
        s.advance_phase();
        assert_eq!(s.phase(), IntakePhase::Complete);
    }

    #[test]
    fn complete_session_rejects_mutation() {
        let mut s = session();
        s.force_complete();
        let err = s.record("q_severity", "7").unwrap_err();
        assert!(matches!(err, ModelError::SessionComplete(_)));
    }

    #[test]
    fn body_location_set_at_most_once() {
        let mut s = session();
        s.set_body_location(BodyRegion::Chest, Some(BodySide::Left))
            .unwrap();
        let err = s
            .set_body_location(BodyRegion::Chest, None)
            .unwrap_err();
        assert!(matches!(err, ModelError::BodyLocationAlreadySet(_)));
        assert_eq!(s.body_region(), Some(BodyRegion::Chest));
        assert_eq!(s.body_side(), Some(BodySide::Left));
    }

    #[test]
    fn red_flags_deduplicated_never_cleared() {
        let mut s = session();
        s.add_red_flag("chest pain");
        s.add_red_flag("chest pain");
        s.add_red_flag("q_radiation");
        assert_eq!(s.red_flags(), &["chest pain", "q_radiation"]);
    }

    #[test]
    fn mutation_bumps_updated_at() {
        let mut s = session();
        let before = s.updated_at();
        s.record("q_a", "x").unwrap();
        assert!(s.updated_at() >= before);
    }

    #[test]
    fn answered_yes_only_on_canonical_yes() {
        let mut s = session();
        s.record("q_nausea", "yes").unwrap();
        s.record("q_fever", "no").unwrap();
        assert!(s.answered_yes("q_nausea"));
        assert!(!s.answered_yes("q_fever"));
        assert!(!s.answered_yes("q_missing"));
    }
}
