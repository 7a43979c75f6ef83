//! Session store trait abstraction.
//!
//! The session is injected into the API client and every flow through this
//! trait instead of being read from ambient storage.

use async_trait::async_trait;

use crate::models::User;
use crate::session::Session;

/// Session storage errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// No data directory was configured and the home directory is unknown
    NoHomeDirectory,
    /// IO error
    Io(String),
    /// Serialization/deserialization error
    Serialization(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NoHomeDirectory => write!(f, "Failed to determine home directory"),
            SessionError::Io(msg) => write!(f, "IO error: {}", msg),
            SessionError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Serialization(err.to_string())
    }
}

/// Trait for session storage and retrieval.
///
/// Nothing here validates or expires the token; it is trusted until the
/// server rejects it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session.
    ///
    /// # Returns
    /// - `Ok(Some(session))` if both the token and the user are stored
    /// - `Ok(None)` if there is no session
    /// - `Err(error)` if the storage could not be read
    async fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Replace the stored session.
    async fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove the stored session. Succeeds if there was none.
    async fn clear(&self) -> Result<(), SessionError>;

    /// The stored bearer token, if any. Storage errors read as "absent".
    async fn token(&self) -> Option<String> {
        match self.load().await {
            Ok(session) => session.map(|s| s.token),
            Err(err) => {
                tracing::warn!("Could not read session token: {}", err);
                None
            }
        }
    }

    /// The stored user profile, if any. Storage errors read as "absent".
    async fn user(&self) -> Option<User> {
        match self.load().await {
            Ok(session) => session.map(|s| s.user),
            Err(err) => {
                tracing::warn!("Could not read session user: {}", err);
                None
            }
        }
    }
}
