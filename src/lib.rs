//! # riddle-cards
//!
//! Riddle rounds for a card-matching word game.
//!
//! A round shows a handful of cards the player has not seen yet and names a
//! word that appears on exactly one of them. The player answers with the
//! card's number; a correct answer scores points and the next round follows.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: Catalogs, stores, config and RNG are passed in.
//!
//! 2. **Game states are values**: Exhaustion, missing rounds and empty
//!    albums are return variants. `Error` is reserved for defects and
//!    collaborator failures.
//!
//! 3. **Deterministic**: A seeded, forkable ChaCha8 RNG drives every draw.
//!
//! ## Modules
//!
//! - `cards`: Card ids, catalogs, word extraction
//! - `core`: RNG and configuration
//! - `session`: Player sessions and pure progress transitions
//! - `rounds`: Round selection and answer validation
//! - `service`: Catalog/session boundaries, commands, replies, `Game`

pub mod cards;
pub mod core;
pub mod error;
pub mod rounds;
pub mod service;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{extract_words, Card, CardCatalog, CardId, WhitespaceWords, WordExtractor};

pub use crate::core::{GameConfig, RiddleRng, RiddleRngState};

pub use crate::error::{Error, Result};

pub use crate::rounds::{AnswerValidator, Outcome, RoundResult, RoundSelector};

pub use crate::service::{
    CatalogSource, Command, Game, MemoryCatalogSource, MemorySessionStore, Reply, RoundCard,
    SessionStore,
};

pub use crate::session::{progress, ActiveRound, AlbumRef, CatalogRef, UserId, UserSession};
