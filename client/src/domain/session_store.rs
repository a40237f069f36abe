//! Process-wide authenticated-user state.
//!
//! The store is an explicitly owned object: front ends build one, share it by
//! `Arc`, and register listeners instead of relying on ambient globals. The
//! in-memory slot is the only shared mutable resource in the client; writers
//! are last-writer-wins and listeners run synchronously on the writer's
//! thread after the slot has been updated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, info, warn};

use super::ports::{SessionStorage, SessionStorageError};
use super::{DomainError, Session};

/// Callback invoked with the new state after every change.
pub type SessionListener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Coarse view of the store used to gate authoritative reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// [`SessionStore::restore`] has not completed yet.
    Restoring,
    /// Confirmed logged out.
    LoggedOut,
    /// A session is held.
    LoggedIn,
}

#[derive(Debug)]
enum SessionState {
    Restoring,
    LoggedOut,
    LoggedIn(Session),
}

impl SessionState {
    const fn session(&self) -> Option<&Session> {
        match self {
            Self::LoggedIn(session) => Some(session),
            Self::Restoring | Self::LoggedOut => None,
        }
    }
}

/// Session store backed by a [`SessionStorage`] adapter.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use holidaze::domain::{AccessToken, Session, SessionStatus, SessionStore};
/// use holidaze::outbound::storage::InMemorySessionStorage;
///
/// let store = SessionStore::new(Arc::new(InMemorySessionStorage::default()));
/// assert_eq!(store.status(), SessionStatus::Restoring);
/// assert!(store.restore().is_none());
///
/// let session = Session {
///     name: "kari".into(),
///     email: "kari@stud.noroff.no".into(),
///     avatar: None,
///     venue_manager: false,
///     access_token: AccessToken::new("token"),
/// };
/// store.login(session.clone()).unwrap();
/// assert_eq!(store.current(), Some(session));
/// ```
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    state: RwLock<SessionState>,
    listeners: Mutex<Vec<(SubscriptionId, SessionListener)>>,
    next_subscription: AtomicU64,
}

impl SessionStore {
    /// Build a store in the [`SessionStatus::Restoring`] state.
    #[must_use]
    pub const fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionState::Restoring),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Load the persisted record into memory.
    ///
    /// A missing, unreadable or malformed record leaves the store logged out;
    /// the reason is logged rather than returned.
    #[must_use]
    pub fn restore(&self) -> Option<Session> {
        let restored = match self.storage.load() {
            Ok(Some(session)) if session.is_well_formed() => {
                debug!(profile = %session.name, "session restored");
                Some(session)
            }
            Ok(Some(_)) => {
                warn!("stored session is missing a name or token; treating as logged out");
                None
            }
            Ok(None) => {
                debug!("no session to restore");
                None
            }
            Err(error) => {
                warn!(error = %error, "could not restore stored session");
                None
            }
        };
        self.replace(restored.clone().map_or(SessionState::LoggedOut, SessionState::LoggedIn));
        restored
    }

    /// Replace any held session with `session`, persisting it first.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; the in-memory state is left untouched.
    pub fn login(&self, session: Session) -> Result<(), SessionStorageError> {
        self.storage.save(&session)?;
        info!(profile = %session.name, "session stored");
        self.replace(SessionState::LoggedIn(session));
        Ok(())
    }

    /// Drop the held session and its persisted record.
    ///
    /// # Errors
    ///
    /// Returns the storage failure. Memory is cleared regardless.
    pub fn logout(&self) -> Result<(), SessionStorageError> {
        let cleared = self.storage.clear();
        if let Err(error) = &cleared {
            warn!(error = %error, "could not clear stored session");
        }
        self.replace(SessionState::LoggedOut);
        info!("session cleared");
        cleared
    }

    /// The held session, if any.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.read_state().session().cloned()
    }

    /// The held session, or [`DomainError::NotLoggedIn`] naming `action`.
    ///
    /// # Errors
    ///
    /// Fails when no session is held.
    pub fn require(&self, action: &'static str) -> Result<Session, DomainError> {
        self.current().ok_or_else(|| DomainError::not_logged_in(action))
    }

    /// Whether the store is restoring, logged out or logged in.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match *self.read_state() {
            SessionState::Restoring => SessionStatus::Restoring,
            SessionState::LoggedOut => SessionStatus::LoggedOut,
            SessionState::LoggedIn(_) => SessionStatus::LoggedIn,
        }
    }

    /// Register `listener` for every subsequent change.
    #[must_use]
    pub fn subscribe(
        &self,
        listener: impl Fn(Option<&Session>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.lock_listeners().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` when `id` was not registered.
    #[must_use]
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock_listeners();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    fn replace(&self, next: SessionState) {
        let snapshot = next.session().cloned();
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;

        // Listeners run outside both locks so they may read the store.
        let listeners: Vec<SessionListener> = self
            .lock_listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(snapshot.as_ref());
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, SessionListener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
