//! File-based session store adapter.

use async_trait::async_trait;
use std::path::Path;

use crate::session::{Session, SessionManager};
use crate::traits::{SessionError, SessionStore};

/// File-based session store.
///
/// Wraps [`SessionManager`] and implements [`SessionStore`]. The binary
/// places it in the configured data directory (`~/.blogdeck` by default).
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    manager: SessionManager,
}

impl FileSessionStore {
    /// Create a store whose file lives in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            manager: SessionManager::in_dir(dir),
        }
    }

    /// Get the path to the session file.
    pub fn session_path(&self) -> &Path {
        self.manager.session_path()
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        self.manager.load()
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        self.manager.save(session)?;
        tracing::info!("Session saved for user {}", session.user.id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.manager.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }
}
