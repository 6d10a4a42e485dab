//! The phase sequencer. Owns no hidden state: an engine is explicitly
//! constructed and passed the session it operates on, so concurrent
//! sessions never share anything. The session itself is single-writer —
//! the caller serializes answer recording against next-question reads.

use serde::Serialize;

use super::validator::{self, ValidationOutcome};
use super::IntakeError;
use crate::catalog::{self, trees, Question};
use crate::models::{BodyRegion, BodySide, IntakePhase, IntakeSession};
use crate::safety::{self, EmergencyDirective};
use crate::triage::refiner;

/// What the UI should present next.
#[derive(Debug, Clone, Serialize)]
pub struct NextQuestion {
    pub question: &'static Question,
    pub phase: IntakePhase,
}

/// Progress descriptor for the current phase. Pure read — calling it
/// twice without an intervening mutation yields identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub phase: IntakePhase,
    pub answered_in_phase: usize,
    pub total_in_phase: usize,
    pub answered_total: usize,
    pub minimum_required: usize,
    pub complete: bool,
}

/// Result of submitting one answer.
#[derive(Debug, Clone, Serialize)]
pub enum SubmitOutcome {
    Recorded,
    /// Recoverable — the UI re-prompts; nothing was recorded.
    Rejected(ValidationOutcome),
    /// Guardrail interrupt — the session is terminal, submission stops.
    Emergency(EmergencyDirective),
}

/// The intake engine proper.
#[derive(Debug, Default)]
pub struct IntakeEngine;

impl IntakeEngine {
    pub fn new() -> Self {
        Self
    }

    /// The first unasked catalog question for the session's phase,
    /// advancing phases as thresholds are met. Returns `None` once the
    /// session is complete — a signal to proceed to triage, not an
    /// error. The loop is bounded by the phase count, so exhausted
    /// question lists can never spin.
    pub fn next_question(&self, session: &mut IntakeSession) -> Option<NextQuestion> {
        for _ in 0..IntakePhase::COUNT {
            let phase = session.phase();
            if phase == IntakePhase::Complete {
                return None;
            }

            if phase == IntakePhase::Diagnostic {
                let tree = trees::tree_for(session.complaint());
                let answered = self.answered_count(session, tree.diagnostic);
                if answered >= tree.minimum_required {
                    session.advance_phase();
                    continue;
                }
            }

            if let Some(question) = self.first_unanswered(session, phase) {
                session.mark_asked(question.id);
                return Some(NextQuestion { question, phase });
            }

            if phase == IntakePhase::Diagnostic {
                // Exhausted below threshold: advance anyway rather than
                // blocking the intake forever.
                tracing::warn!(
                    visit_id = session.visit_id(),
                    "Diagnostic questions exhausted below minimum threshold; advancing"
                );
            }
            session.advance_phase();
        }
        None
    }

    /// Record a pre-validated answer. Validation is the caller's
    /// responsibility (via `validate` or `submit_answer`).
    pub fn record_answer(
        &self,
        session: &mut IntakeSession,
        question_id: &str,
        value: &str,
    ) -> Result<(), IntakeError> {
        self.resolve_question(session, question_id)?;
        session.record(question_id, value)?;
        Ok(())
    }

    /// Full submission flow: emergency screen, then validation, then
    /// recording. The emergency screen runs first so a red-flag phrase
    /// embedded in a routine answer is never queued behind anything.
    pub fn submit_answer(
        &self,
        session: &mut IntakeSession,
        question_id: &str,
        raw: &str,
    ) -> Result<SubmitOutcome, IntakeError> {
        if session.is_complete() {
            return Err(IntakeError::SessionComplete);
        }
        let question = self.resolve_question(session, question_id)?;

        let directive = safety::screen_free_text(raw);
        if directive.is_stop() {
            self.interrupt(session, &directive);
            return Ok(SubmitOutcome::Emergency(directive));
        }

        match validator::validate(question.kind, raw) {
            ValidationOutcome::Accepted { sanitized } => {
                session.record(question.id, &sanitized)?;
                if question.red_flag && sanitized == "yes" {
                    session.add_red_flag(question.id);
                }
                Ok(SubmitOutcome::Recorded)
            }
            rejected => Ok(SubmitOutcome::Rejected(rejected)),
        }
    }

    /// Checklist variant: screens the selection against the exact
    /// emergency option set, then records the selection verbatim.
    pub fn submit_selection(
        &self,
        session: &mut IntakeSession,
        question_id: &str,
        selected: &[String],
    ) -> Result<SubmitOutcome, IntakeError> {
        if session.is_complete() {
            return Err(IntakeError::SessionComplete);
        }
        let question = self.resolve_question(session, question_id)?;

        let directive = safety::screen_options(selected);
        if directive.is_stop() {
            self.interrupt(session, &directive);
            return Ok(SubmitOutcome::Emergency(directive));
        }

        session.record(question.id, &selected.join(", "))?;
        Ok(SubmitOutcome::Recorded)
    }

    /// Register the body map selection and merge the refiner's
    /// follow-ups into the session's question stream, exactly once.
    /// Returns how many questions were merged.
    pub fn select_body_location(
        &self,
        session: &mut IntakeSession,
        region: BodyRegion,
        side: Option<BodySide>,
    ) -> Result<usize, IntakeError> {
        session.set_body_location(region, side)?;
        let refined = refiner::refine(session.complaint(), region, side);
        let count = refined.len();
        session.merge_refined(refined);
        tracing::debug!(
            visit_id = session.visit_id(),
            region = region.as_str(),
            merged = count,
            "Body location registered"
        );
        Ok(count)
    }

    /// Progress for the current phase only, plus cumulative totals.
    pub fn progress(&self, session: &IntakeSession) -> Progress {
        let phase = session.phase();
        let ids = self.phase_ids(session, phase);
        let answered_in_phase = self.answered_count(session, &ids);
        Progress {
            phase,
            answered_in_phase,
            total_in_phase: ids.len(),
            answered_total: session.answers().len(),
            minimum_required: trees::tree_for(session.complaint()).minimum_required,
            complete: session.is_complete(),
        }
    }

    // ── Internals ────────────────────────────────────────

    fn interrupt(&self, session: &mut IntakeSession, directive: &EmergencyDirective) {
        for flag in &directive.triggered {
            session.add_red_flag(flag);
        }
        session.force_complete();
    }

    /// Question ids walked in a phase. Refined questions join the tail
    /// of HISTORY, after the base history list.
    fn phase_ids(&self, session: &IntakeSession, phase: IntakePhase) -> Vec<&'static str> {
        let tree = trees::tree_for(session.complaint());
        match phase {
            IntakePhase::Safety => tree.safety.to_vec(),
            IntakePhase::Diagnostic => tree.diagnostic.to_vec(),
            IntakePhase::History => {
                let mut ids = tree.history.to_vec();
                ids.extend(session.refined_questions().iter().map(|q| q.id));
                ids
            }
            IntakePhase::Complete => Vec::new(),
        }
    }

    fn first_unanswered(
        &self,
        session: &IntakeSession,
        phase: IntakePhase,
    ) -> Option<&'static Question> {
        self.phase_ids(session, phase)
            .into_iter()
            .find(|id| !session.has_answered(id))
            .and_then(|id| self.lookup(session, id))
    }

    fn answered_count(&self, session: &IntakeSession, ids: &[&str]) -> usize {
        ids.iter().filter(|id| session.has_answered(id)).count()
    }

    fn lookup(&self, session: &IntakeSession, id: &str) -> Option<&'static Question> {
        catalog::find_question(id).or_else(|| {
            session
                .refined_questions()
                .iter()
                .find(|q| q.id == id)
                .copied()
        })
    }

    fn resolve_question(
        &self,
        session: &IntakeSession,
        id: &str,
    ) -> Result<&'static Question, IntakeError> {
        self.lookup(session, id)
            .ok_or_else(|| IntakeError::UnknownQuestion(id.to_string()))
    }
}
