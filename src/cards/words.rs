//! Word extraction from card text.
//!
//! Riddle words are compared after normalization: lower-cased, split on
//! whitespace, empty tokens dropped. Punctuation is kept as part of a word.

use super::card::Card;

/// Derives the normalized words of a card.
///
/// Implementations must be pure: the same card always yields the same words.
pub trait WordExtractor {
    /// Extract words from a card. Cards without text yield no words.
    fn extract(&self, card: &Card) -> Vec<String>;
}

/// Default extractor: lower-case and split on whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceWords;

impl WordExtractor for WhitespaceWords {
    fn extract(&self, card: &Card) -> Vec<String> {
        card.text().map(normalize).unwrap_or_default()
    }
}

/// Extract words with the default extractor.
///
/// ```
/// use riddle_cards::cards::{extract_words, Card};
///
/// let words = extract_words(&Card::new("1", "  Кот   СИДИТ "));
/// assert_eq!(words, vec!["кот", "сидит"]);
/// ```
#[must_use]
pub fn extract_words(card: &Card) -> Vec<String> {
    WhitespaceWords.extract(card)
}

fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
