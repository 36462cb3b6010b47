//! Personality scoring: turns a bag of text items into a trait profile and
//! career suggestions.
//!
//! Algorithm:
//! 1. Per item: sentiment polarity, token count, popularity are summed.
//! 2. Per item and trait: number of distinct trigger words present (substring
//!    match on the lowercased text) is added to that trait's raw total.
//! 3. Averages are taken over the item count.
//! 4. Raw totals are max-normalized to 0–100 (all zero if nothing matched).
//! 5. The top 3 traits (ties broken by declaration order) contribute their
//!    career lists, deduplicated in first-seen order.

use std::collections::HashSet;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::analysis::careers::{career_selector, CareerSelector};
use crate::analysis::sentiment::{LexiconSentiment, SentimentScorer};
use crate::analysis::tokenizer::{Tokenizer, UnicodeTokenizer};
use crate::analysis::traits::Trait;
use crate::models::text_item::TextItem;

const TOP_TRAIT_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No data found for this user")]
    EmptyData,
}

/// Normalized intensity per trait, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraitProfile([f64; 5]);

impl TraitProfile {
    pub fn get(&self, t: Trait) -> f64 {
        self.0[t.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        Trait::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    /// Max-normalizes raw keyword totals. A zero maximum yields an all-zero profile.
    pub fn from_raw(raw: &[u32; 5]) -> Self {
        let max = raw.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return Self::default();
        }
        let divisor = max as f64;
        let mut values = [0.0; 5];
        for (value, &count) in values.iter_mut().zip(raw) {
            *value = count as f64 / divisor * 100.0;
        }
        Self(values)
    }

    /// Traits sorted by score, highest first. Equal scores keep declaration order.
    pub fn ranked(&self) -> Vec<Trait> {
        let mut traits: Vec<(Trait, f64)> = self.iter().collect();
        traits.sort_by(|a, b| b.1.total_cmp(&a.1));
        traits.into_iter().map(|(t, _)| t).collect()
    }
}

impl Serialize for TraitProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Trait::ALL.len()))?;
        for (t, value) in self.iter() {
            map.serialize_entry(t.as_str(), &value)?;
        }
        map.end()
    }
}

/// Full scoring output for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub trait_profile: TraitProfile,
    pub top_traits: Vec<Trait>,
    pub avg_sentiment: f64,
    pub avg_word_count: f64,
    pub avg_popularity: f64,
    pub item_count: usize,
    pub recommended_careers: Vec<String>,
}

/// Stateless scorer. The sentiment and tokenizer backends are swappable.
#[derive(Clone)]
pub struct PersonalityAnalyzer {
    sentiment: Arc<dyn SentimentScorer>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for PersonalityAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(LexiconSentiment), Arc::new(UnicodeTokenizer))
    }
}

impl PersonalityAnalyzer {
    pub fn new(sentiment: Arc<dyn SentimentScorer>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            sentiment,
            tokenizer,
        }
    }

    pub fn analyze(&self, items: &[TextItem]) -> Result<AnalysisResult, AnalysisError> {
        if items.is_empty() {
            return Err(AnalysisError::EmptyData);
        }

        let mut total_sentiment = 0.0_f64;
        let mut total_tokens = 0_usize;
        let mut total_popularity = 0_i64;
        let mut raw = [0_u32; 5];

        for item in items {
            total_sentiment += self.sentiment.polarity(&item.text);
            total_tokens += self.tokenizer.count_tokens(&item.text);
            total_popularity += item.popularity;

            let lowered = item.text.to_lowercase();
            for t in Trait::ALL {
                raw[t.index()] += t.count_matches(&lowered);
            }
        }

        let n = items.len() as f64;
        let trait_profile = TraitProfile::from_raw(&raw);
        let top_traits: Vec<Trait> = trait_profile
            .ranked()
            .into_iter()
            .take(TOP_TRAIT_COUNT)
            .collect();
        let recommended_careers = recommend_careers(&trait_profile, &top_traits, career_selector);

        debug!(
            "Scored {} items: raw={:?}, top={:?}",
            items.len(),
            raw,
            top_traits
        );

        Ok(AnalysisResult {
            trait_profile,
            top_traits,
            avg_sentiment: total_sentiment / n,
            avg_word_count: total_tokens as f64 / n,
            avg_popularity: total_popularity as f64 / n,
            item_count: items.len(),
            recommended_careers,
        })
    }
}

/// Concatenates each top trait's selected career list, keeping the first
/// occurrence of any repeated title.
fn recommend_careers(
    profile: &TraitProfile,
    top_traits: &[Trait],
    selector_for: impl Fn(Trait) -> CareerSelector,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut careers = Vec::new();

    for &t in top_traits {
        for &career in selector_for(t).select(profile.get(t)) {
            if seen.insert(career) {
                careers.push(career.to_string());
            }
        }
    }

    careers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> PersonalityAnalyzer {
        PersonalityAnalyzer::default()
    }

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(analyzer().analyze(&[]), Err(AnalysisError::EmptyData));
        assert_eq!(
            AnalysisError::EmptyData.to_string(),
            "No data found for this user"
        );
    }

    #[test]
    fn test_helpful_comment_scores_agreeableness() {
        let items = vec![TextItem::comment(
            "I love helping people, thank you for your support",
            10,
        )];
        let result = analyzer().analyze(&items).unwrap();

        assert_eq!(result.trait_profile.get(Trait::Agreeableness), 100.0);
        assert!(result.trait_profile.get(Trait::Extraversion) < 100.0);
        assert_eq!(result.trait_profile.get(Trait::Neuroticism), 0.0);
        assert_eq!(result.top_traits[0], Trait::Agreeableness);
        assert_eq!(result.avg_popularity, 10.0);
        assert_eq!(result.item_count, 1);
        assert!(result.avg_sentiment > 0.0);
    }

    #[test]
    fn test_agreeableness_raw_count() {
        let text = "i love helping people, thank you for your support";
        // help, thank, support
        assert_eq!(Trait::Agreeableness.count_matches(text), 3);
        assert_eq!(Trait::Extraversion.count_matches(text), 1);
    }

    #[test]
    fn test_max_is_100_when_anything_matched() {
        let items = vec![
            TextItem::comment("I worry about work", 1),
            TextItem::submission("New music", "so creative", 5),
        ];
        let result = analyzer().analyze(&items).unwrap();
        let max = result
            .trait_profile
            .iter()
            .map(|(_, v)| v)
            .fold(0.0, f64::max);
        assert_eq!(max, 100.0);
        for (_, v) in result.trait_profile.iter() {
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_all_zero_when_nothing_matched() {
        let items = vec![TextItem::comment("zzz", 0), TextItem::comment("ok", 2)];
        let result = analyzer().analyze(&items).unwrap();
        assert!(result.trait_profile.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_all_zero_tie_picks_declaration_order() {
        let items = vec![TextItem::comment("zzz", 0), TextItem::comment("qqq", 0)];
        let result = analyzer().analyze(&items).unwrap();
        assert_eq!(
            result.top_traits,
            vec![
                Trait::Openness,
                Trait::Conscientiousness,
                Trait::Extraversion
            ]
        );
        assert_eq!(result.recommended_careers.len(), 24);
        assert_eq!(
            result.recommended_careers[0],
            "Artist (Painter, Musician, Writer)"
        );
    }

    #[test]
    fn test_neuroticism_at_exactly_50_selects_low_list() {
        // raw: agreeableness 2, neuroticism 1 -> neuroticism normalized to 50
        let items = vec![TextItem::comment("please help, i worry", 0)];
        let result = analyzer().analyze(&items).unwrap();
        assert_eq!(result.trait_profile.get(Trait::Neuroticism), 50.0);
        assert!(result.top_traits.contains(&Trait::Neuroticism));
        assert!(result
            .recommended_careers
            .contains(&"Emergency Room Doctor".to_string()));
        assert!(!result.recommended_careers.contains(&"Librarian".to_string()));
    }

    #[test]
    fn test_high_neuroticism_selects_high_list() {
        let items = vec![TextItem::comment("so much stress and anxiety, i hate it", 0)];
        let result = analyzer().analyze(&items).unwrap();
        assert_eq!(result.trait_profile.get(Trait::Neuroticism), 100.0);
        assert_eq!(result.recommended_careers[0], "Writer / Poet");
        assert!(!result.recommended_careers.contains(&"Pilot".to_string()));
    }

    #[test]
    fn test_recommended_careers_unique_and_ordered() {
        let items = vec![TextItem::comment(
            "stress and anxiety, new art, music",
            0,
        )];
        let result = analyzer().analyze(&items).unwrap();
        let unique: HashSet<&String> = result.recommended_careers.iter().collect();
        assert_eq!(unique.len(), result.recommended_careers.len());

        // Openness leads (new, art, music) and neuroticism follows (stress, anxiety)
        assert_eq!(result.top_traits[0], Trait::Openness);
        assert_eq!(result.top_traits[1], Trait::Neuroticism);
        assert_eq!(
            result.recommended_careers[0],
            "Artist (Painter, Musician, Writer)"
        );
        let first_neuro = result
            .recommended_careers
            .iter()
            .position(|c| c == "Writer / Poet")
            .unwrap();
        assert_eq!(first_neuro, 8);
    }

    #[test]
    fn test_dedup_across_built_in_tables() {
        let profile = TraitProfile([100.0, 0.0, 0.0, 0.0, 80.0]);
        let careers = recommend_careers(
            &profile,
            &[Trait::Openness, Trait::Neuroticism],
            career_selector,
        );
        let unique: HashSet<&String> = careers.iter().collect();
        assert_eq!(unique.len(), careers.len());
        assert_eq!(careers.len(), 13);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        const FIRST: &[&str] = &["Writer", "Editor", "Writer"];
        const SECOND: &[&str] = &["Analyst", "Editor", "Archivist", "Writer"];
        const THIRD: &[&str] = &["Archivist", "Pilot"];

        let profile = TraitProfile([100.0, 60.0, 30.0, 0.0, 0.0]);
        let careers = recommend_careers(
            &profile,
            &[Trait::Openness, Trait::Conscientiousness, Trait::Extraversion],
            |t| match t {
                Trait::Openness => CareerSelector::Fixed(FIRST),
                Trait::Conscientiousness => CareerSelector::Fixed(SECOND),
                _ => CareerSelector::Fixed(THIRD),
            },
        );

        assert_eq!(
            careers,
            vec!["Writer", "Editor", "Analyst", "Archivist", "Pilot"]
        );
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let items = vec![
            TextItem::submission("Party with friends", "so much fun", 42),
            TextItem::comment("I should plan my routine", -3),
        ];
        let a = analyzer();
        assert_eq!(a.analyze(&items).unwrap(), a.analyze(&items).unwrap());
    }

    #[test]
    fn test_averages_over_items() {
        let items = vec![
            TextItem::comment("one two", 4),
            TextItem::comment("three four five six", -2),
        ];
        let result = analyzer().analyze(&items).unwrap();
        assert_eq!(result.avg_popularity, 1.0);
        assert_eq!(result.avg_word_count, 3.0);
        assert_eq!(result.item_count, 2);
    }

    #[test]
    fn test_profile_serializes_in_declaration_order() {
        let profile = TraitProfile::from_raw(&[1, 2, 0, 0, 4]);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            json,
            r#"{"openness":25.0,"conscientiousness":50.0,"extraversion":0.0,"agreeableness":0.0,"neuroticism":100.0}"#
        );
    }

    #[test]
    fn test_custom_backends_are_used() {
        struct Fixed;
        impl SentimentScorer for Fixed {
            fn polarity(&self, _text: &str) -> f64 {
                -0.5
            }
        }
        impl Tokenizer for Fixed {
            fn count_tokens(&self, _text: &str) -> usize {
                7
            }
        }

        let a = PersonalityAnalyzer::new(Arc::new(Fixed), Arc::new(Fixed));
        let result = a.analyze(&[TextItem::comment("anything", 0)]).unwrap();
        assert_eq!(result.avg_sentiment, -0.5);
        assert_eq!(result.avg_word_count, 7.0);
    }
}
