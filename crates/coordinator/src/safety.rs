//! Crisis phrase detection.
//!
//! Plain case-insensitive substring matching: no stemming, no negation,
//! no word boundaries. Misses and false alarms are accepted.

const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "i want to die",
    "no reason to live",
    "self harm",
    "hurt myself",
];

/// True if `text` contains any crisis phrase, ignoring case.
pub fn is_crisis(text: &str) -> bool {
    let lower = text.to_lowercase();
    CRISIS_PHRASES.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phrase_triggers_anywhere_in_text() {
        for phrase in CRISIS_PHRASES {
            assert!(is_crisis(phrase), "{phrase}");
            assert!(is_crisis(&format!("lately {phrase}, honestly")), "{phrase}");
            assert!(is_crisis(&phrase.to_uppercase()), "{phrase}");
        }
    }

    #[test]
    fn sentence_scenarios() {
        assert!(is_crisis("I want to end my life"));
        assert!(is_crisis("Sometimes I think I want to die."));
        assert!(is_crisis("thinking about SELF HARM again"));
    }

    #[test]
    fn ordinary_text_does_not_trigger() {
        assert!(!is_crisis("I feel stressed"));
        assert!(!is_crisis("selfharmony"));
        assert!(!is_crisis("my workout hurt my back"));
        assert!(!is_crisis(""));
    }
}
