//! Lexicon-based sentiment polarity.
//!
//! Word valences follow the AFINN convention (-5..=5). The polarity of a
//! text is the mean valence of its scored words divided by 5, so it always
//! lands in `[-1, 1]`.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::analysis::tokenizer::word_tokens;

pub trait SentimentScorer: Send + Sync {
    /// Polarity in `[-1, 1]`; 0.0 when nothing in the text carries sentiment.
    fn polarity(&self, text: &str) -> f64;
}

const MAX_VALENCE: f64 = 5.0;
/// A negated word keeps half its magnitude with the sign flipped.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "doesn't", "didn't", "isn't", "wasn't", "aren't",
    "can't", "cannot", "won't", "wouldn't", "shouldn't", "nothing", "nobody", "neither",
];

const LEXICON: &[(&str, i8)] = &[
    ("abandon", -2),
    ("abuse", -3),
    ("accept", 1),
    ("admire", 3),
    ("afraid", -2),
    ("agree", 1),
    ("amazing", 4),
    ("angry", -3),
    ("annoyed", -2),
    ("annoying", -2),
    ("anxiety", -2),
    ("anxious", -2),
    ("appreciate", 2),
    ("awesome", 4),
    ("awful", -3),
    ("bad", -3),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("bored", -2),
    ("boring", -3),
    ("brilliant", 4),
    ("broken", -1),
    ("calm", 2),
    ("care", 2),
    ("cheer", 2),
    ("confused", -2),
    ("cool", 1),
    ("crap", -3),
    ("cry", -1),
    ("cute", 2),
    ("damn", -2),
    ("dead", -3),
    ("depressed", -2),
    ("depression", -2),
    ("disappointed", -2),
    ("disgusting", -3),
    ("dislike", -2),
    ("dumb", -3),
    ("easy", 1),
    ("enjoy", 2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fail", -2),
    ("failed", -2),
    ("fantastic", 4),
    ("fear", -2),
    ("fine", 2),
    ("fun", 4),
    ("funny", 4),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("grateful", 3),
    ("happy", 3),
    ("hate", -3),
    ("hated", -3),
    ("help", 2),
    ("helpful", 2),
    ("helping", 2),
    ("hope", 2),
    ("horrible", -3),
    ("hurt", -2),
    ("idiot", -3),
    ("interesting", 2),
    ("joy", 3),
    ("kind", 2),
    ("lame", -2),
    ("like", 2),
    ("lonely", -2),
    ("lost", -3),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("lucky", 3),
    ("mad", -3),
    ("miss", -2),
    ("mistake", -2),
    ("nervous", -2),
    ("nice", 3),
    ("pain", -2),
    ("perfect", 3),
    ("pleased", 3),
    ("poor", -2),
    ("problem", -2),
    ("proud", 2),
    ("sad", -2),
    ("scared", -2),
    ("shit", -4),
    ("sick", -2),
    ("sorry", -1),
    ("stupid", -2),
    ("stress", -1),
    ("stressed", -2),
    ("success", 2),
    ("suck", -3),
    ("sucks", -3),
    ("super", 3),
    ("support", 2),
    ("terrible", -3),
    ("thank", 2),
    ("thanks", 2),
    ("tired", -2),
    ("ugly", -3),
    ("unfair", -2),
    ("unhappy", -2),
    ("upset", -2),
    ("useful", 2),
    ("useless", -2),
    ("welcome", 2),
    ("win", 4),
    ("wonderful", 4),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("wow", 4),
    ("wrong", -2),
];

lazy_static! {
    static ref VALENCES: HashMap<&'static str, i8> = LEXICON.iter().copied().collect();
}

/// Default scorer backed by the built-in word list.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

impl SentimentScorer for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0_f64;
        let mut scored = 0_u32;
        let mut negate_next = false;

        for word in word_tokens(text) {
            if NEGATORS.contains(&word.as_str()) {
                negate_next = true;
                continue;
            }

            if let Some(&valence) = VALENCES.get(word.as_str()) {
                let mut value = valence as f64;
                if negate_next {
                    value *= NEGATION_FACTOR;
                }
                total += value;
                scored += 1;
            }
            negate_next = false;
        }

        if scored == 0 {
            return 0.0;
        }

        (total / scored as f64 / MAX_VALENCE).clamp(-1.0, 1.0)
    }
}
