//! Exact-match emergency options for checklist-style UI answers.
//! Unlike the free-text scan, these compare whole option strings —
//! the UI guarantees the option text verbatim.

/// Emergency checklist options, exact strings in both languages.
pub static EMERGENCY_OPTIONS: &[&str] = &[
    "Severe chest pain",
    "Difficulty breathing",
    "Loss of consciousness",
    "Uncontrolled bleeding",
    "Sudden weakness on one side",
    "سینے میں شدید درد",
    "سانس لینے میں دشواری",
    "بے ہوشی",
    "بے قابو خون بہنا",
    "اچانک ایک طرف کمزوری",
];

/// Return the emergency options present in the selection (trimmed,
/// exact match).
pub fn match_selected(selected: &[String]) -> Vec<&'static str> {
    EMERGENCY_OPTIONS
        .iter()
        .filter(|opt| selected.iter().any(|s| s.trim() == **opt))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_option_matches() {
        let matched = match_selected(&sel(&["Severe chest pain"]));
        assert_eq!(matched, vec!["Severe chest pain"]);
    }

    #[test]
    fn partial_text_does_not_match() {
        // Exact-match path: free text belongs to the keyword scan.
        assert!(match_selected(&sel(&["chest pain"])).is_empty());
    }

    #[test]
    fn whitespace_trimmed_before_compare() {
        let matched = match_selected(&sel(&["  Difficulty breathing "]));
        assert_eq!(matched, vec!["Difficulty breathing"]);
    }

    #[test]
    fn urdu_option_matches() {
        let matched = match_selected(&sel(&["بے ہوشی"]));
        assert_eq!(matched, vec!["بے ہوشی"]);
    }

    #[test]
    fn mixed_selection_reports_only_emergencies() {
        let matched = match_selected(&sel(&["Runny nose", "Uncontrolled bleeding"]));
        assert_eq!(matched, vec!["Uncontrolled bleeding"]);
    }
}
