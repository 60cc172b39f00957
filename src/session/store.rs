//! The session store: one process-wide [`Session`], persisted across
//! restarts and observed by the UI.
//!
//! Two durable keys are written. `"token"` holds the bare bearer string
//! because the HTTP adapter reads it directly on every request without
//! depending on the store's record format; `"auth-storage"` holds the
//! full session record and is this store's own concern.
//!
//! Observers are invoked synchronously on every state change and must
//! not call back into the store (single writer per event turn).

use std::sync::{Arc, Mutex, RwLock};

use thiserror::Error;

use crate::domain::{PersistedSession, Session, User};
use crate::ports::{KeyValueStore, StorageError};

/// Durable key holding the bare bearer token.
pub const TOKEN_KEY: &str = "token";

/// Durable key holding the persisted session record.
pub const SESSION_KEY: &str = "auth-storage";

/// Errors from session transitions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `update_user` outside of the `Authenticated` state.
    #[error("Cannot update user: session is not authenticated")]
    NotAuthenticated,

    /// The durable store failed underneath a transition.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

type Observer = Box<dyn Fn(&Session) + Send + Sync>;

/// Holds the current [`Session`], persists it, and notifies observers.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    session: RwLock<Session>,
    observers: Mutex<Vec<Observer>>,
}

impl SessionStore {
    /// Creates a store, rehydrating from `"auth-storage"` when a
    /// well-formed record exists. A malformed record is cleared and the
    /// store starts `Anonymous`.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let session = Self::rehydrate(storage.as_ref());
        Self {
            storage,
            session: RwLock::new(session),
            observers: Mutex::new(Vec::new()),
        }
    }

    fn rehydrate(storage: &dyn KeyValueStore) -> Session {
        let raw = match storage.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Session::Anonymous,
            Err(error) => {
                tracing::warn!(%error, "failed to read persisted session");
                return Session::Anonymous;
            }
        };
        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(persisted) => Session::from(persisted),
            Err(error) => {
                tracing::warn!(%error, "malformed persisted session, clearing");
                if let Err(error) = storage.remove(SESSION_KEY) {
                    tracing::warn!(%error, "failed to clear malformed session record");
                }
                Session::Anonymous
            }
        }
    }

    /// A snapshot of the current session.
    ///
    /// # Panics
    ///
    /// Panics if an observer poisoned the lock by panicking.
    pub fn current(&self) -> Session {
        self.session.read().unwrap().clone()
    }

    /// Registers an observer, invoked synchronously with every new state.
    pub fn subscribe(&self, observer: impl Fn(&Session) + Send + Sync + 'static) {
        self.observers.lock().unwrap().push(Box::new(observer));
    }

    /// Transitions to `Authenticated` from any state.
    pub fn set_authenticated(&self, user: User, token: String) -> Result<(), SessionError> {
        self.storage.set(TOKEN_KEY, &token)?;
        self.replace(Session::Authenticated { user, token })
    }

    /// Transitions to `Guest`. A no-op when already `Guest`.
    pub fn set_guest(&self) -> Result<(), SessionError> {
        if self.current().is_guest() {
            return Ok(());
        }
        self.storage.remove(TOKEN_KEY)?;
        self.replace(Session::Guest)
    }

    /// Transitions to `Anonymous`, clearing both persisted keys. Already
    /// being `Anonymous` is a no-op for observers, but the keys are
    /// cleared regardless.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(SESSION_KEY)?;
        if self.current() == Session::Anonymous {
            return Ok(());
        }
        let mut guard = self.session.write().unwrap();
        *guard = Session::Anonymous;
        let snapshot = guard.clone();
        drop(guard);
        self.notify(&snapshot);
        Ok(())
    }

    /// Replaces the user payload of an `Authenticated` session, leaving
    /// the token untouched. Rejected in any other state.
    pub fn update_user(&self, user: User) -> Result<(), SessionError> {
        let token = match self.current() {
            Session::Authenticated { token, .. } => token,
            _ => return Err(SessionError::NotAuthenticated),
        };
        self.replace(Session::Authenticated { user, token })
    }

    fn replace(&self, next: Session) -> Result<(), SessionError> {
        let record = serde_json::to_string(&PersistedSession::from(&next))
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(SESSION_KEY, &record)?;

        let mut guard = self.session.write().unwrap();
        *guard = next;
        let snapshot = guard.clone();
        drop(guard);
        self.notify(&snapshot);
        Ok(())
    }

    fn notify(&self, session: &Session) {
        let observers = self.observers.lock().unwrap();
        for observer in observers.iter() {
            observer(session);
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.current())
            .finish_non_exhaustive()
    }
}
