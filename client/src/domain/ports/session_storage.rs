//! Driven port for the durable session slot.
//!
//! Storage is synchronous: the record is a few hundred bytes and the store
//! reads it once at startup.

use super::define_port_error;
use crate::domain::Session;

define_port_error! {
    /// Errors surfaced by session storage adapters.
    pub enum SessionStorageError {
        /// The backing medium could not be read or written.
        Io {
            /// Underlying I/O failure.
            message: String,
        } => "session storage failed: {message}",
        /// A record exists but is not a valid session.
        Corrupt {
            /// Parse or validation failure.
            message: String,
        } => "stored session is unreadable: {message}",
    }
}

/// Port for persisting the logged-in session under a fixed key.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStorage: Send + Sync {
    /// Read the stored session, `None` when nothing is stored.
    fn load(&self) -> Result<Option<Session>, SessionStorageError>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<(), SessionStorageError>;

    /// Remove the stored session. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<(), SessionStorageError>;
}
