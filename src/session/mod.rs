//! Player sessions and the pure transitions that advance them.
//!
//! - `state`: `UserSession`, `ActiveRound`, `CatalogRef` and friends
//! - `progress`: reset, catalog switch, seen tracking, scoring

pub mod progress;
pub mod state;

pub use state::{ActiveRound, AlbumRef, CandidateCards, CatalogRef, UserId, UserSession};
