//! Signed-in session state.
//!
//! A [`Session`] is the token/user pair returned by `/login`. It is
//! persisted by a [`crate::traits::SessionStore`]; [`SessionManager`] is the
//! file-backed storage used by the production store.

pub mod storage;

pub use storage::{SessionManager, SESSION_DIR, SESSION_FILE};

use crate::models::{LoginResponse, User};

/// Authentication token plus the profile of the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// Profile of the signed-in user.
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.access_token,
            user: response.user,
        }
    }
}
