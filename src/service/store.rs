//! Session store boundary.
//!
//! Stores are plain key-value: one `UserSession` per `UserId`. Unknown users
//! load as a default session. Serializing concurrent updates for the same
//! user is the caller's job (`Game` does it).

use std::sync::Mutex;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::session::{UserId, UserSession};

/// Loads and saves player sessions.
pub trait SessionStore {
    /// Load a session, or a default one if the user is unknown.
    fn load(&self, user: UserId) -> Result<UserSession>;

    /// Persist a session, replacing any previous one.
    fn save(&self, session: &UserSession) -> Result<()>;
}

/// In-memory store keeping bincode-encoded sessions.
///
/// Encoding on save keeps stored sessions independent of the caller's copy,
/// like a real database would.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<FxHashMap<UserId, Vec<u8>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> Result<usize> {
        Ok(self.sessions.lock().map_err(|_| Error::Poisoned)?.len())
    }

    /// Check if the store has no sessions.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, user: UserId) -> Result<UserSession> {
        let sessions = self.sessions.lock().map_err(|_| Error::Poisoned)?;
        match sessions.get(&user) {
            Some(bytes) => Ok(bincode::deserialize(bytes)?),
            None => Ok(UserSession::new(user)),
        }
    }

    fn save(&self, session: &UserSession) -> Result<()> {
        let bytes = bincode::serialize(session)?;
        self.sessions
            .lock()
            .map_err(|_| Error::Poisoned)?
            .insert(session.user_id, bytes);
        Ok(())
    }
}
