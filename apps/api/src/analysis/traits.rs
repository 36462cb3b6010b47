//! The five OCEAN-style traits and their lexical trigger words.
//!
//! Declaration order matters: it is the tie-break order when ranking traits
//! and the order in which profiles are displayed and serialized.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    /// All traits in declaration order.
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Trait::Openness => "openness",
            Trait::Conscientiousness => "conscientiousness",
            Trait::Extraversion => "extraversion",
            Trait::Agreeableness => "agreeableness",
            Trait::Neuroticism => "neuroticism",
        }
    }

    /// Position in `ALL`, used to index fixed-size score arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase trigger words for this trait.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Trait::Openness => OPENNESS_KEYWORDS,
            Trait::Conscientiousness => CONSCIENTIOUSNESS_KEYWORDS,
            Trait::Extraversion => EXTRAVERSION_KEYWORDS,
            Trait::Agreeableness => AGREEABLENESS_KEYWORDS,
            Trait::Neuroticism => NEUROTICISM_KEYWORDS,
        }
    }

    /// Counts how many of this trait's keywords appear in `lowered_text`.
    ///
    /// Matching is by substring, so "art" also fires inside "start". Each
    /// keyword contributes at most 1 no matter how often it occurs.
    pub fn count_matches(self, lowered_text: &str) -> u32 {
        self.keywords()
            .iter()
            .filter(|kw| lowered_text.contains(*kw))
            .count() as u32
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const OPENNESS_KEYWORDS: &[&str] = &[
    "new", "creative", "idea", "curious", "art", "music", "culture", "learn", "explore",
    "discover",
];

const CONSCIENTIOUSNESS_KEYWORDS: &[&str] = &[
    "should",
    "must",
    "plan",
    "organize",
    "routine",
    "responsible",
    "duty",
    "work",
    "goal",
    "achieve",
];

const EXTRAVERSION_KEYWORDS: &[&str] = &[
    "party", "friends", "social", "together", "group", "fun", "exciting", "people", "talk",
    "share",
];

const AGREEABLENESS_KEYWORDS: &[&str] = &[
    "help",
    "thank",
    "appreciate",
    "kind",
    "care",
    "support",
    "understand",
    "sorry",
    "please",
    "welcome",
];

const NEUROTICISM_KEYWORDS: &[&str] = &[
    "worry",
    "afraid",
    "nervous",
    "stress",
    "anxiety",
    "sad",
    "depression",
    "angry",
    "upset",
    "hate",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trait_has_ten_lowercase_keywords() {
        for t in Trait::ALL {
            let kws = t.keywords();
            assert_eq!(kws.len(), 10, "{t} should have 10 keywords");
            assert!(kws.iter().all(|k| *k == k.to_lowercase()));
        }
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, t) in Trait::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
        assert!(Trait::Openness < Trait::Neuroticism);
    }

    #[test]
    fn test_keyword_counted_once_per_text() {
        let text = "help help help";
        assert_eq!(Trait::Agreeableness.count_matches(text), 1);
    }

    #[test]
    fn test_substring_match_inside_other_words() {
        // "start" contains "art"; kept deliberately
        assert_eq!(Trait::Openness.count_matches("let's start"), 1);
    }

    #[test]
    fn test_no_matches_in_neutral_text() {
        assert_eq!(Trait::Neuroticism.count_matches("the sky is blue"), 0);
    }

    #[test]
    fn test_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Trait::Conscientiousness).unwrap();
        assert_eq!(json, "\"conscientiousness\"");
    }
}
