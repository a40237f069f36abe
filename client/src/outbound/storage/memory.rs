//! Process-local session persistence.

use std::sync::{Mutex, PoisonError};

use crate::domain::Session;
use crate::domain::ports::{SessionStorage, SessionStorageError};

/// Keeps the session record in a mutex-guarded slot.
///
/// Useful when embedding the client without a writable directory; nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    slot: Mutex<Option<Session>>,
}

impl InMemorySessionStorage {
    /// Storage pre-populated with `session`.
    #[must_use]
    pub const fn with_session(session: Session) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn load(&self) -> Result<Option<Session>, SessionStorageError> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionStorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
