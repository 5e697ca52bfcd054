//! Per-player session state.
//!
//! ## UserSession
//!
//! Everything the engine remembers about one player:
//! - Cards already shown in the current catalog
//! - The pending round, if any
//! - Score
//! - Which catalog governs the session
//!
//! Defaults are applied once, in `UserSession::new`. Stores hand back a
//! fresh session for unknown players rather than patching fields at each
//! access site.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Stable player identifier, as supplied by the chat platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl UserId {
    /// Create a new user ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User({})", self.0)
    }
}

/// External photo album, addressed the way the platform addresses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumRef {
    /// Album owner (negative for communities).
    pub owner_id: i64,
    /// Album id within the owner.
    pub album_id: i64,
}

impl AlbumRef {
    /// Create a new album reference.
    #[must_use]
    pub const fn new(owner_id: i64, album_id: i64) -> Self {
        Self { owner_id, album_id }
    }
}

impl std::fmt::Display for AlbumRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "album{}_{}", self.owner_id, self.album_id)
    }
}

/// Which catalog governs a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogRef {
    /// The global card set.
    #[default]
    Default,
    /// A user-selected album replacing the global set.
    Album(AlbumRef),
}

impl std::fmt::Display for CatalogRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogRef::Default => write!(f, "default"),
            CatalogRef::Album(album) => write!(f, "{}", album),
        }
    }
}

/// Cards shown in one round. Inline for the usual batch of 5.
pub type CandidateCards = SmallVec<[CardId; 5]>;

/// A round awaiting the player's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRound {
    /// Cards shown, in sample order. Distinct.
    pub candidate_cards: CandidateCards,

    /// Word unique to exactly one candidate.
    ///
    /// `None` only when no batch with a unique word could be drawn; such a
    /// round can never be answered correctly.
    pub riddle_word: Option<String>,
}

impl ActiveRound {
    /// Create a new round.
    #[must_use]
    pub fn new(candidate_cards: CandidateCards, riddle_word: Option<String>) -> Self {
        Self {
            candidate_cards,
            riddle_word,
        }
    }

    /// Check if a card is part of this round.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.candidate_cards.contains(id)
    }
}

/// Mutable game state of one player.
///
/// Uses an `im` persistent set for `seen_cards`, so cloning a session to
/// produce the next one is O(1).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Owner of this session.
    pub user_id: UserId,

    /// Cards already shown in the current catalog.
    pub seen_cards: ImHashSet<CardId>,

    /// Pending round, present between round generation and answer.
    pub active_round: Option<ActiveRound>,

    /// Accumulated score.
    pub score: u32,

    /// Catalog governing this session.
    pub catalog: CatalogRef,
}

impl UserSession {
    /// Create a session with defaults.
    ///
    /// ## Defaults
    ///
    /// - `seen_cards`: empty
    /// - `active_round`: none
    /// - `score`: 0
    /// - `catalog`: `CatalogRef::Default`
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            seen_cards: ImHashSet::new(),
            active_round: None,
            score: 0,
            catalog: CatalogRef::Default,
        }
    }

    /// Check if a card has been shown already.
    #[must_use]
    pub fn has_seen(&self, id: &CardId) -> bool {
        self.seen_cards.contains(id)
    }

    /// Riddle word of the pending round, if any.
    #[must_use]
    pub fn riddle_word(&self) -> Option<&str> {
        self.active_round.as_ref()?.riddle_word.as_deref()
    }
}
