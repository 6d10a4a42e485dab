//! Free-text emergency phrase list, both languages.
//!
//! Matching is case-insensitive substring containment with no negation
//! handling: "no chest pain" still matches "chest pain". That weakness
//! is preserved deliberately for compatibility with the established
//! screening behavior and is pinned by a test below.

/// Bilingual emergency phrases. Substring match against lowercased input.
pub static EMERGENCY_PHRASES: &[&str] = &[
    // English
    "chest pain",
    "crushing chest",
    "can't breathe",
    "cannot breathe",
    "not breathing",
    "difficulty breathing",
    "short of breath",
    "unconscious",
    "passed out",
    "severe bleeding",
    "bleeding heavily",
    "coughing blood",
    "vomiting blood",
    "heart attack",
    "stroke",
    "seizure",
    "slurred speech",
    "suicide",
    "overdose",
    // Urdu
    "سینے میں درد",
    "سانس نہیں آ رہی",
    "سانس لینے میں دشواری",
    "بے ہوش",
    "دل کا دورہ",
    "فالج",
    "دورہ پڑ",
    "خون بہہ رہا",
    "خون کی قے",
    "خودکشی",
    "زہر کھا",
];

/// Return every phrase the text contains, in list order.
pub fn scan(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    EMERGENCY_PHRASES
        .iter()
        .filter(|p| lower.contains(*p))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_matches_nothing() {
        assert!(scan("my ankle is a little sore after football").is_empty());
    }

    #[test]
    fn phrase_embedded_in_routine_answer_matches() {
        let matched = scan("It started as indigestion but now there is chest pain too");
        assert_eq!(matched, vec!["chest pain"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(!scan("CHEST PAIN and sweating").is_empty());
        assert!(!scan("Heart Attack?").is_empty());
    }

    #[test]
    fn urdu_phrase_matches() {
        let matched = scan("مجھے سینے میں درد ہو رہا ہے");
        assert!(matched.contains(&"سینے میں درد"));
    }

    #[test]
    fn multiple_phrases_all_reported() {
        let matched = scan("chest pain and I can't breathe");
        assert!(matched.contains(&"chest pain"));
        assert!(matched.contains(&"can't breathe"));
    }

    /// Known limitation, preserved on purpose: substring matching has no
    /// negation handling, so a denial still triggers the screen.
    #[test]
    fn negated_phrase_still_matches() {
        let matched = scan("no chest pain, just a cough");
        assert_eq!(matched, vec!["chest pain"]);
    }
}
