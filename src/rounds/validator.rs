//! Answer validation against the pending round.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, WhitespaceWords, WordExtractor};
use crate::core::GameConfig;
use crate::session::{progress, UserSession};

/// Verdict on a submitted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The selected card carries the riddle word.
    Correct,
    /// Wrong card, unparseable answer, or an index outside the catalog.
    Incorrect,
    /// Nothing to answer; the player must start a round first.
    NoActiveRound,
}

/// Checks a submitted 1-based catalog index against the riddle word.
///
/// Indices refer to positions in the whole catalog, as labelled on the
/// player's buttons, not to positions within the round.
#[derive(Clone, Debug)]
pub struct AnswerValidator<W = WhitespaceWords> {
    reward: u32,
    words: W,
}

impl AnswerValidator {
    /// Create a validator with the default word extractor.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_extractor(config, WhitespaceWords)
    }
}

impl<W: WordExtractor> AnswerValidator<W> {
    /// Create a validator with a custom word extractor.
    #[must_use]
    pub fn with_extractor(config: &GameConfig, words: W) -> Self {
        Self {
            reward: config.correct_reward,
            words,
        }
    }

    /// Judge an answer and update the session.
    ///
    /// `Correct` adds the reward to the score. `Correct` and `Incorrect`
    /// both consume the active round; the caller is expected to draw the
    /// next one. `NoActiveRound` leaves the session untouched.
    pub fn validate(
        &self,
        catalog: &CardCatalog,
        session: &mut UserSession,
        submitted: Option<usize>,
    ) -> Outcome {
        let outcome = self.check(catalog, session, submitted);

        match outcome {
            Outcome::Correct => {
                let scored = progress::apply_score(session, i64::from(self.reward));
                *session = progress::clear_round(&scored);
            }
            Outcome::Incorrect => *session = progress::clear_round(session),
            Outcome::NoActiveRound => {}
        }

        tracing::debug!(user = %session.user_id, ?submitted, ?outcome, score = session.score, "answer judged");
        outcome
    }

    /// Judge an answer without touching the session.
    #[must_use]
    pub fn check(
        &self,
        catalog: &CardCatalog,
        session: &UserSession,
        submitted: Option<usize>,
    ) -> Outcome {
        let Some(round) = &session.active_round else {
            return Outcome::NoActiveRound;
        };

        let card = submitted.and_then(|position| catalog.card_at(position));
        let matched = match (card, round.riddle_word.as_deref()) {
            (Some(card), Some(word)) => self.words.extract(card).iter().any(|w| w == word),
            _ => false,
        };

        if matched {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}
