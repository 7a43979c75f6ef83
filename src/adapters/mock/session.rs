//! In-memory session store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::session::Session;
use crate::traits::{SessionError, SessionStore};

/// In-memory session storage.
///
/// Clones share the same slot, so a test can keep a handle while the code
/// under test owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    session: Arc<Mutex<Option<Session>>>,
    fail_saves: Arc<Mutex<bool>>,
}

impl InMemorySession {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        let store = Self::default();
        *store.session.lock().unwrap() = Some(session);
        store
    }

    /// Current contents, without going through the trait.
    pub fn snapshot(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    /// Make subsequent saves fail with an IO error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }
}

#[async_trait]
impl SessionStore for InMemorySession {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.snapshot())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        if *self.fail_saves.lock().unwrap() {
            return Err(SessionError::Io("simulated write failure".to_string()));
        }
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
