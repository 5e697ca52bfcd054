//! Request/response facade over the engine.
//!
//! Each call runs one read-modify-write cycle on a player's session:
//! load the session and its catalog, run the selector or validator, save,
//! and return the replies to render.
//!
//! ## Concurrency
//!
//! Calls for the same `UserId` are serialized by a per-user lock, so two
//! messages from one player never interleave. Calls for different players
//! only share the RNG fork point and the lock table, both held briefly.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use super::catalog_source::CatalogSource;
use super::command::Command;
use super::reply::{Reply, RoundCard};
use super::store::SessionStore;
use crate::cards::CardCatalog;
use crate::core::{GameConfig, RiddleRng, RiddleRngState};
use crate::error::{Error, Result};
use crate::rounds::{AnswerValidator, Outcome, RoundResult, RoundSelector};
use crate::session::{progress, AlbumRef, CatalogRef, UserId, UserSession};

/// The game as seen by a chat host.
///
/// ## Example
///
/// ```
/// use riddle_cards::cards::{Card, CardCatalog};
/// use riddle_cards::core::GameConfig;
/// use riddle_cards::service::{Game, MemoryCatalogSource, MemorySessionStore, Reply};
/// use riddle_cards::session::UserId;
///
/// let catalog = CardCatalog::from_cards(vec![
///     Card::new("1", "кот сидит"),
///     Card::new("2", "пес бежит"),
/// ]).unwrap();
/// let game = Game::new(
///     &GameConfig::default(),
///     MemoryCatalogSource::new(catalog),
///     MemorySessionStore::new(),
/// );
///
/// let replies = game.handle(UserId::new(1), "старт").unwrap();
/// assert!(matches!(replies[0], Reply::Round { .. }));
/// ```
pub struct Game<C, S> {
    catalogs: C,
    store: S,
    selector: RoundSelector,
    validator: AnswerValidator,
    rng: Mutex<RiddleRng>,
    locks: Mutex<FxHashMap<UserId, Arc<Mutex<()>>>>,
}

impl<C: CatalogSource, S: SessionStore> Game<C, S> {
    /// Create a game from its collaborators.
    #[must_use]
    pub fn new(config: &GameConfig, catalogs: C, store: S) -> Self {
        Self {
            catalogs,
            store,
            selector: RoundSelector::new(config),
            validator: AnswerValidator::new(config),
            rng: Mutex::new(RiddleRng::new(config.seed)),
            locks: Mutex::new(FxHashMap::default()),
        }
    }

    /// Resume a game whose RNG was checkpointed with `rng_state`.
    #[must_use]
    pub fn with_rng_state(mut self, state: &RiddleRngState) -> Self {
        self.rng = Mutex::new(RiddleRng::from_state(state));
        self
    }

    /// Handle one raw player message.
    pub fn handle(&self, user: UserId, text: &str) -> Result<Vec<Reply>> {
        let command = Command::parse(text);
        tracing::debug!(%user, ?command, "message received");

        let result = match command {
            Command::Start => self.start(user),
            Command::SwitchAlbum(album) => self.switch_album(user, album),
            Command::Answer(index) => self.answer(user, index),
        };

        if let Err(err) = &result {
            tracing::error!(%user, error = %err, "request failed");
        }
        result
    }

    /// Reset the player and present the first round of the default catalog.
    ///
    /// An empty default catalog leaves the session untouched.
    pub fn start(&self, user: UserId) -> Result<Vec<Reply>> {
        self.with_user(user, || {
            let session = progress::reset(&self.store.load(user)?);
            let catalog = self.catalogs.load_catalog(&session.catalog)?;
            if catalog.is_empty() {
                tracing::warn!(%user, "default catalog has no cards");
                return Ok(vec![Reply::AlbumEmpty]);
            }
            self.present_next(&catalog, session).map(|reply| vec![reply])
        })
    }

    /// Replace the player's catalog with an album and start over on it.
    ///
    /// An empty album leaves the session untouched.
    pub fn switch_album(&self, user: UserId, album: AlbumRef) -> Result<Vec<Reply>> {
        self.with_user(user, || {
            let reference = CatalogRef::Album(album);
            let catalog = self.catalogs.load_catalog(&reference)?;
            if catalog.is_empty() {
                tracing::info!(%user, %album, "album has no cards");
                return Ok(vec![Reply::AlbumEmpty]);
            }

            tracing::info!(%user, %album, cards = catalog.len(), "album connected");
            let session = progress::switch_catalog(&self.store.load(user)?, reference);
            let connected = Reply::AlbumConnected {
                card_count: catalog.len(),
            };
            Ok(vec![connected, self.present_next(&catalog, session)?])
        })
    }

    /// Judge an answer, then present the next round.
    pub fn answer(&self, user: UserId, index: Option<usize>) -> Result<Vec<Reply>> {
        self.with_user(user, || {
            let (mut session, catalog) = self.load(user)?;

            let correct = match self.validator.validate(&catalog, &mut session, index) {
                Outcome::NoActiveRound => return Ok(vec![Reply::NoActiveRound]),
                Outcome::Correct => true,
                Outcome::Incorrect => false,
            };
            let verdict = Reply::Verdict {
                correct,
                score: session.score,
            };
            Ok(vec![verdict, self.present_next(&catalog, session)?])
        })
    }

    /// Current session of a player, with stale catalog entries dropped.
    pub fn session(&self, user: UserId) -> Result<UserSession> {
        self.with_user(user, || self.load(user).map(|(session, _)| session))
    }

    /// Checkpoint the RNG.
    pub fn rng_state(&self) -> Result<RiddleRngState> {
        Ok(self.rng.lock().map_err(|_| Error::Poisoned)?.state())
    }

    /// The session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&self, user: UserId) -> Result<(UserSession, Arc<CardCatalog>)> {
        let session = self.store.load(user)?;
        let catalog = self.catalogs.load_catalog(&session.catalog)?;
        Ok((progress::retain_catalog(&session, &catalog), catalog))
    }

    /// Draw a round, save the session, and describe the round.
    fn present_next(&self, catalog: &CardCatalog, mut session: UserSession) -> Result<Reply> {
        let mut rng = self.rng.lock().map_err(|_| Error::Poisoned)?.fork();

        let reply = match self.selector.select_round(catalog, &mut session, &mut rng) {
            RoundResult::Riddle(round) => Reply::Round {
                catalog: session.catalog,
                cards: round
                    .candidate_cards
                    .iter()
                    .filter_map(|id| {
                        catalog.position(id).map(|label| RoundCard {
                            id: id.clone(),
                            label,
                        })
                    })
                    .collect(),
                riddle_word: round.riddle_word,
            },
            RoundResult::Exhausted => Reply::Exhausted,
        };

        self.store.save(&session)?;
        Ok(reply)
    }

    /// Run `f` holding the player's lock.
    ///
    /// The entry is dropped from the table once no other request holds or
    /// waits on it, so the table only tracks players with requests in flight.
    fn with_user<T>(&self, user: UserId, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = {
            let mut locks = self.locks.lock().map_err(|_| Error::Poisoned)?;
            Arc::clone(locks.entry(user).or_default())
        };

        let result = match lock.lock() {
            Ok(_guard) => f(),
            Err(_) => Err(Error::Poisoned),
        };

        let mut locks = self.locks.lock().map_err(|_| Error::Poisoned)?;
        // Clones are only taken under the table lock: the table and `lock`.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(&user);
        }
        result
    }
}
