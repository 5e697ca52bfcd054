//! Error types for riddle-cards.
//!
//! Ordinary game states (no active round, exhausted catalog, empty album)
//! are return values, not errors. `Error` covers defects and failures of
//! the external collaborators.

use thiserror::Error;

use crate::cards::CardId;
use crate::session::CatalogRef;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the engine and its boundary implementations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown catalog: {0}")]
    UnknownCatalog(CatalogRef),

    #[error("duplicate card id {0} in catalog")]
    DuplicateCard(CardId),

    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("lock poisoned by a panicked request")]
    Poisoned,
}
