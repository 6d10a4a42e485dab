//! Defensive parsing of summarizer output. Local models wrap JSON in
//! prose, fence it inconsistently, leave trailing commas, and drop
//! fields; everything here degrades per-field instead of failing the
//! whole summary.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{ClinicalNote, NarrativeSummary, SummarizerError};

/// `"key": value,}` and `value,]` — the most common local-model emission
/// that serde rejects outright.
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").unwrap());

/// Parse the raw model response into a summary. Fails only when no JSON
/// object can be located at all; individual bad fields fall back to
/// defaults.
pub fn parse_summary(response: &str) -> Result<NarrativeSummary, SummarizerError> {
    let block = extract_json_block(response)?;
    let repaired = repair(block);

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct RawSummary {
        summary: Option<String>,
        suspected_condition: Option<String>,
        risk_level: Option<String>,
        confidence: Option<serde_json::Value>,
        risks: Option<Vec<serde_json::Value>>,
        suggestions: Option<Vec<serde_json::Value>>,
        note: Option<serde_json::Value>,
    }

    let raw: RawSummary = serde_json::from_str(&repaired)
        .map_err(|e| SummarizerError::JsonParsing(e.to_string()))?;

    Ok(NarrativeSummary {
        summary: raw.summary.unwrap_or_default(),
        suspected_condition: raw.suspected_condition.filter(|s| !s.trim().is_empty()),
        risk_level: normalize_risk_level(raw.risk_level),
        confidence: parse_confidence(raw.confidence),
        risks: parse_string_array(raw.risks),
        suggestions: parse_string_array(raw.suggestions),
        note: parse_note(raw.note),
    })
}

/// Locate the JSON object in the response: fenced ```json block first,
/// then any fenced block that opens with a brace, then the widest
/// first-`{` to last-`}` span.
fn extract_json_block(response: &str) -> Result<&str, SummarizerError> {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return Ok(after_fence[..end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            let block = after_fence[..end].trim();
            if block.starts_with('{') {
                return Ok(block);
            }
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            return Ok(&trimmed[start..=end]);
        }
    }

    Err(SummarizerError::MalformedResponse(
        "No JSON object found in summarizer response".to_string(),
    ))
}

/// Strip control characters and trailing commas before handing the
/// block to serde.
fn repair(block: &str) -> String {
    let cleaned: String = block
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    TRAILING_COMMA.replace_all(&cleaned, "$1").into_owned()
}

fn normalize_risk_level(raw: Option<String>) -> Option<String> {
    let level = raw?.trim().to_lowercase();
    match level.as_str() {
        "low" | "moderate" | "high" => Some(level),
        _ => None,
    }
}

/// Accept a number or a numeric string; clamp to 0.0..=1.0; anything
/// else is 0.0.
fn parse_confidence(raw: Option<serde_json::Value>) -> f32 {
    let value = match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    value.clamp(0.0, 1.0) as f32
}

/// Keep string items, drop everything else. Skip-don't-fail.
fn parse_string_array(items: Option<Vec<serde_json::Value>>) -> Vec<String> {
    items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .collect()
}

fn parse_note(raw: Option<serde_json::Value>) -> ClinicalNote {
    let Some(serde_json::Value::Object(map)) = raw else {
        return ClinicalNote::default();
    };
    let field = |name: &str| {
        map.get(name)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };
    ClinicalNote {
        subjective: field("subjective"),
        objective: field("objective"),
        assessment: field("assessment"),
        plan: field("plan"),
    }
}
