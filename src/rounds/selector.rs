//! Round selection: pick a fresh batch of cards and a riddle word.
//!
//! ## Algorithm
//!
//! 1. Filter the catalog down to cards the player has not seen.
//! 2. Nothing left: `RoundResult::Exhausted`.
//! 3. Sample up to `batch_size` distinct cards (partial Fisher-Yates).
//! 4. Count every extracted word across the batch.
//! 5. Words counted exactly once point at exactly one card; pick one.
//!
//! A batch can have no such word (e.g. identical captions). The selector
//! then draws a new batch, up to `max_resample_attempts` times, before
//! giving up and presenting the last batch without a riddle word.

use rustc_hash::FxHashMap;

use crate::cards::{CardCatalog, CardId, WhitespaceWords, WordExtractor};
use crate::core::{GameConfig, RiddleRng};
use crate::session::{progress, ActiveRound, CandidateCards, UserSession};

/// Result of a round request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundResult {
    /// A new round to present.
    Riddle(ActiveRound),
    /// Every card in the catalog has been shown.
    Exhausted,
}

impl RoundResult {
    /// Get the round, if one was produced.
    #[must_use]
    pub fn round(&self) -> Option<&ActiveRound> {
        match self {
            RoundResult::Riddle(round) => Some(round),
            RoundResult::Exhausted => None,
        }
    }
}

/// Chooses the next batch of cards and its riddle word.
///
/// ## Example
///
/// ```
/// use riddle_cards::cards::{Card, CardCatalog};
/// use riddle_cards::core::{GameConfig, RiddleRng};
/// use riddle_cards::rounds::{RoundResult, RoundSelector};
/// use riddle_cards::session::{UserId, UserSession};
///
/// let catalog = CardCatalog::from_cards(vec![
///     Card::new("1", "кот сидит"),
///     Card::new("2", "пес бежит"),
/// ]).unwrap();
/// let selector = RoundSelector::new(&GameConfig::default());
/// let mut session = UserSession::new(UserId::new(1));
/// let mut rng = RiddleRng::new(42);
///
/// let result = selector.select_round(&catalog, &mut session, &mut rng);
/// assert!(matches!(result, RoundResult::Riddle(_)));
/// assert_eq!(session.seen_cards.len(), 2);
///
/// let result = selector.select_round(&catalog, &mut session, &mut rng);
/// assert_eq!(result, RoundResult::Exhausted);
/// ```
#[derive(Clone, Debug)]
pub struct RoundSelector<W = WhitespaceWords> {
    batch_size: usize,
    max_resample_attempts: u32,
    words: W,
}

impl RoundSelector {
    /// Create a selector with the default word extractor.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_extractor(config, WhitespaceWords)
    }
}

impl<W: WordExtractor> RoundSelector<W> {
    /// Create a selector with a custom word extractor.
    #[must_use]
    pub fn with_extractor(config: &GameConfig, words: W) -> Self {
        Self {
            batch_size: config.batch_size.max(1),
            max_resample_attempts: config.max_resample_attempts,
            words,
        }
    }

    /// Draw the next round and record it in the session.
    ///
    /// On `Riddle`, the batch is added to `seen_cards` and becomes the
    /// session's active round. On `Exhausted`, the session is untouched.
    pub fn select_round(
        &self,
        catalog: &CardCatalog,
        session: &mut UserSession,
        rng: &mut RiddleRng,
    ) -> RoundResult {
        let result = self.draw(catalog, session, rng);

        if let RoundResult::Riddle(round) = &result {
            let seen = progress::record_seen(session, &round.candidate_cards);
            *session = progress::set_round(&seen, round.clone());
        }

        result
    }

    /// Draw the next round without touching the session.
    pub fn draw(
        &self,
        catalog: &CardCatalog,
        session: &UserSession,
        rng: &mut RiddleRng,
    ) -> RoundResult {
        let remaining: Vec<&CardId> = catalog.ids().filter(|id| !session.has_seen(id)).collect();

        if remaining.is_empty() {
            tracing::debug!(user = %session.user_id, catalog = %session.catalog, "catalog exhausted");
            return RoundResult::Exhausted;
        }

        let mut attempt = 0;
        let (batch, clues) = loop {
            let batch: CandidateCards = rng
                .sample_indices(remaining.len(), self.batch_size)
                .into_iter()
                .map(|i| remaining[i].clone())
                .collect();
            let clues = self.unique_words(catalog, &batch);

            // A batch covering every remaining card cannot change on resample.
            if !clues.is_empty()
                || remaining.len() <= self.batch_size
                || attempt >= self.max_resample_attempts
            {
                break (batch, clues);
            }
            attempt += 1;
            tracing::debug!(user = %session.user_id, attempt, "no unique word in batch, resampling");
        };

        let riddle_word = rng.choose(&clues).cloned();
        if riddle_word.is_none() {
            tracing::warn!(
                user = %session.user_id,
                cards = batch.len(),
                "presenting round without a riddle word"
            );
        }

        RoundResult::Riddle(ActiveRound::new(batch, riddle_word))
    }

    /// Words that occur exactly once across the given cards.
    ///
    /// Returned in first-occurrence order. Cards missing from the catalog
    /// contribute nothing.
    #[must_use]
    pub fn unique_words(&self, catalog: &CardCatalog, cards: &[CardId]) -> Vec<String> {
        let extracted: Vec<String> = cards
            .iter()
            .filter_map(|id| catalog.get(id))
            .flat_map(|card| self.words.extract(card))
            .collect();

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for word in &extracted {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }

        extracted
            .iter()
            .filter(|word| counts.get(word.as_str()) == Some(&1))
            .cloned()
            .collect()
    }
}
