/// Application-level constants
pub const APP_NAME: &str = "Rehnuma";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Severity answers are a 0-10 numeric rating scale.
pub const SEVERITY_MIN: i64 = 0;
pub const SEVERITY_MAX: i64 = 10;

/// Minimum character counts enforced by the validator.
pub const MIN_DURATION_LEN: usize = 3;
pub const MIN_COMPLAINT_LEN: usize = 10;
/// A chief complaint at or under this length that matches a vague term
/// is rejected as too vague rather than merely too short.
pub const VAGUE_COMPLAINT_CEILING: usize = 25;

/// National emergency number quoted in emergency directives (Rescue 1122).
pub const EMERGENCY_NUMBER: &str = "1122";

/// Hard timeout for a narrative summarization attempt.
pub const SUMMARIZER_TIMEOUT_SECS: u64 = 30;

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Base URL of the narrative summarizer collaborator.
/// Overridable for staging/tests via REHNUMA_SUMMARIZER_URL.
pub fn summarizer_base_url() -> String {
    std::env::var("REHNUMA_SUMMARIZER_URL")
        .unwrap_or_else(|_| "http://localhost:11434".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_rehnuma() {
        assert_eq!(APP_NAME, "Rehnuma");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn severity_scale_is_zero_to_ten() {
        assert_eq!(SEVERITY_MIN, 0);
        assert_eq!(SEVERITY_MAX, 10);
    }

    #[test]
    fn default_filter_scoped_to_crate() {
        assert!(default_log_filter().starts_with("rehnuma"));
    }
}
