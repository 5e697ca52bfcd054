//! Pure state transitions over a `UserSession`.
//!
//! Each function takes the current session and returns the next one. None of
//! them perform I/O; callers persist the result through a `SessionStore`.

use super::state::{ActiveRound, CatalogRef, UserSession};
use crate::cards::{CardCatalog, CardId};

/// Back to defaults, keeping only the user id.
///
/// The catalog also returns to `CatalogRef::Default`.
#[must_use]
pub fn reset(session: &UserSession) -> UserSession {
    UserSession::new(session.user_id)
}

/// Reset progress and attach a different catalog.
#[must_use]
pub fn switch_catalog(session: &UserSession, catalog: CatalogRef) -> UserSession {
    UserSession {
        catalog,
        ..reset(session)
    }
}

/// Mark cards as seen. Already-seen cards are not duplicated.
#[must_use]
pub fn record_seen<'a>(
    session: &UserSession,
    ids: impl IntoIterator<Item = &'a CardId>,
) -> UserSession {
    let mut next = session.clone();
    for id in ids {
        next.seen_cards.insert(id.clone());
    }
    next
}

/// Add `delta` to the score, clamping at zero.
#[must_use]
pub fn apply_score(session: &UserSession, delta: i64) -> UserSession {
    let score = (i64::from(session.score) + delta).clamp(0, i64::from(u32::MAX));
    UserSession {
        score: score as u32,
        ..session.clone()
    }
}

/// Install a new pending round.
#[must_use]
pub fn set_round(session: &UserSession, round: ActiveRound) -> UserSession {
    UserSession {
        active_round: Some(round),
        ..session.clone()
    }
}

/// Drop the pending round.
#[must_use]
pub fn clear_round(session: &UserSession) -> UserSession {
    UserSession {
        active_round: None,
        ..session.clone()
    }
}

/// Drop state that refers to cards outside `catalog`.
///
/// Stale seen ids are removed. A pending round with any card not in the
/// catalog is discarded entirely.
#[must_use]
pub fn retain_catalog(session: &UserSession, catalog: &CardCatalog) -> UserSession {
    let mut next = session.clone();
    next.seen_cards = session
        .seen_cards
        .iter()
        .filter(|id| catalog.contains(id))
        .cloned()
        .collect();

    let stale_round = next
        .active_round
        .as_ref()
        .is_some_and(|round| round.candidate_cards.iter().any(|id| !catalog.contains(id)));
    if stale_round {
        next.active_round = None;
    }
    next
}
