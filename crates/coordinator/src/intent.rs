//! Keyword intent classification.

use serde::{Deserialize, Serialize};

/// Coarse label assigned to one user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Yes,
    No,
    Stress,
    Diet,
    Fitness,
    Sleep,
    Motivation,
    General,
}

const YES_REPLIES: &[&str] = &["yes", "yeah", "yep", "sure"];
const NO_REPLIES: &[&str] = &["no", "nope", "nah"];

/// Topic keywords in priority order. The first list with a hit wins.
const TOPIC_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Stress, &["stress", "anxiety", "panic", "overwhelmed"]),
    (Intent::Diet, &["diet", "nutrition", "fat loss", "weight loss"]),
    (Intent::Fitness, &["muscle", "gym", "workout", "exercise"]),
    (Intent::Sleep, &["sleep", "insomnia", "tired"]),
    (Intent::Motivation, &["motivation", "burnout", "lazy"]),
];

impl Intent {
    /// Intents that have a guidance script and are recorded in memory.
    pub const TOPICS: [Intent; 5] = [
        Intent::Stress,
        Intent::Diet,
        Intent::Fitness,
        Intent::Sleep,
        Intent::Motivation,
    ];

    /// Classify free text.
    ///
    /// Short affirmative and negative replies must match the whole
    /// lower-cased input exactly (no trimming), so "yes please" is not `Yes`.
    /// Everything else is a substring search over the keyword lists.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();

        if YES_REPLIES.contains(&lower.as_str()) {
            return Intent::Yes;
        }
        if NO_REPLIES.contains(&lower.as_str()) {
            return Intent::No;
        }

        TOPIC_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::General)
    }

    pub fn is_topic(self) -> bool {
        Self::TOPICS.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Yes => "yes",
            Intent::No => "no",
            Intent::Stress => "stress",
            Intent::Diet => "diet",
            Intent::Fitness => "fitness",
            Intent::Sleep => "sleep",
            Intent::Motivation => "motivation",
            Intent::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmatives_match_exactly() {
        for text in ["yes", "Yeah", "YEP", "sure"] {
            assert_eq!(Intent::classify(text), Intent::Yes, "{text}");
        }
        for text in ["no", "Nope", "NAH"] {
            assert_eq!(Intent::classify(text), Intent::No, "{text}");
        }
    }

    #[test]
    fn affirmatives_inside_sentences_do_not_match() {
        assert_eq!(Intent::classify("yes please"), Intent::General);
        assert_eq!(Intent::classify("sure thing"), Intent::General);
        assert_eq!(Intent::classify("no idea"), Intent::General);
        assert_eq!(Intent::classify(" yes"), Intent::General);
    }

    #[test]
    fn yes_reply_falls_through_to_keywords() {
        assert_eq!(Intent::classify("yes, I can't sleep"), Intent::Sleep);
    }

    #[test]
    fn topic_keywords() {
        assert_eq!(Intent::classify("I feel stressed"), Intent::Stress);
        assert_eq!(Intent::classify("Panic attacks at night"), Intent::Stress);
        assert_eq!(Intent::classify("best nutrition plan?"), Intent::Diet);
        assert_eq!(Intent::classify("how about weight loss"), Intent::Diet);
        assert_eq!(Intent::classify("gym tips"), Intent::Fitness);
        assert_eq!(Intent::classify("I have insomnia"), Intent::Sleep);
        assert_eq!(Intent::classify("always TIRED"), Intent::Sleep);
        assert_eq!(Intent::classify("feeling lazy today"), Intent::Motivation);
        assert_eq!(Intent::classify("tell me a joke"), Intent::General);
        assert_eq!(Intent::classify(""), Intent::General);
    }

    #[test]
    fn earlier_category_wins() {
        assert_eq!(Intent::classify("I'm stressed about my diet"), Intent::Stress);
        assert_eq!(Intent::classify("diet and workout"), Intent::Diet);
        assert_eq!(Intent::classify("too tired for the gym"), Intent::Fitness);
        assert_eq!(Intent::classify("burnout ruins my sleep"), Intent::Sleep);
    }

    #[test]
    fn topics_are_the_guidance_intents() {
        assert!(Intent::Stress.is_topic());
        assert!(Intent::Motivation.is_topic());
        assert!(!Intent::Yes.is_topic());
        assert!(!Intent::No.is_topic());
        assert!(!Intent::General.is_topic());
    }

    #[test]
    fn labels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Intent::Fitness).unwrap(), "\"fitness\"");
        assert_eq!(Intent::Diet.to_string(), "diet");
    }
}
