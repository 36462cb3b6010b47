//! Token counting for average post length.

use unicode_segmentation::UnicodeSegmentation;

pub trait Tokenizer: Send + Sync {
    fn count_tokens(&self, text: &str) -> usize;
}

/// Counts Unicode word-boundary segments that are not pure whitespace.
/// Punctuation marks count as their own tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        text.split_word_bounds()
            .filter(|seg| !seg.chars().all(char::is_whitespace))
            .count()
    }
}

/// Lowercased word tokens, punctuation dropped. Shared with the sentiment lexicon.
pub fn word_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words().map(|w| w.to_lowercase())
}
