//! Prompt assembly for the narrative summarizer.

use crate::models::IntakeSession;
use crate::triage::summary;

pub const SYSTEM_PROMPT: &str = "You are a clinical intake summarizer. You read a \
completed patient intake transcript and produce a structured JSON summary for a \
clinician. You NEVER diagnose, NEVER recommend treatment to the patient, and NEVER \
invent findings not present in the transcript. Patient answers may be in English \
or Urdu; write the summary in English but quote Urdu answers verbatim where the \
wording matters.";

/// Build the generation prompt from the session transcript and the
/// deterministic baseline facts. The baseline is restated so the model
/// cannot quietly drop the red flags the engine already found.
pub fn build_prompt(session: &IntakeSession) -> String {
    format!(
        "Summarize this patient intake.\n\n\
RULES:\n\
1. Use ONLY information from the transcript below.\n\
2. The BASELINE facts were established deterministically; restate them, never contradict them.\n\
3. For missing fields, use null. For missing arrays, use [].\n\
4. confidence is your own 0.0-1.0 estimate of summary completeness.\n\n\
BASELINE:\n{context}\n\n\
TRANSCRIPT:\n{transcript}\n\n\
OUTPUT FORMAT (JSON only, no prose):\n\
```json\n\
{{\n\
  \"summary\": \"two to four sentence narrative\",\n\
  \"suspected_condition\": \"string or null\",\n\
  \"risk_level\": \"low|moderate|high or null\",\n\
  \"confidence\": 0.0,\n\
  \"risks\": [\"string\"],\n\
  \"suggestions\": [\"string\"],\n\
  \"note\": {{\n\
    \"subjective\": \"\",\n\
    \"objective\": \"\",\n\
    \"assessment\": \"\",\n\
    \"plan\": \"\"\n\
  }}\n\
}}\n\
```",
        context = summary::baseline_context(session),
        transcript = summary::build_transcript(session),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplaintType;

    #[test]
    fn prompt_carries_transcript_and_baseline() {
        let mut s = IntakeSession::new("v-1", "p-1", ComplaintType::ChestPain);
        s.record("q_onset", "2 days ago").unwrap();
        s.add_red_flag("q_consciousness");
        let prompt = build_prompt(&s);
        assert!(prompt.contains("2 days ago"));
        assert!(prompt.contains("q_consciousness"));
        assert!(prompt.contains("BASELINE:"));
    }

    #[test]
    fn system_prompt_forbids_diagnosis() {
        assert!(SYSTEM_PROMPT.contains("NEVER diagnose"));
    }
}
