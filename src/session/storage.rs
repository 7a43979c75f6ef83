//! File-backed session storage.
//!
//! The session lives in `~/.blogdeck/session.json` as a flat key/value
//! object with two string entries: the bearer token and the JSON-serialized
//! user profile.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::Session;
use crate::models::User;
use crate::traits::SessionError;

/// The session directory name under the home directory.
pub const SESSION_DIR: &str = ".blogdeck";

/// The session file name.
pub const SESSION_FILE: &str = "session.json";

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Manages session storage and retrieval.
#[derive(Debug, Clone)]
pub struct SessionManager {
    session_path: PathBuf,
}

impl SessionManager {
    /// Create a manager storing the session file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            session_path: dir.as_ref().join(SESSION_FILE),
        }
    }

    /// Get the path to the session file.
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// Read the raw key/value entries. A missing file has no entries; an
    /// unparsable file is treated the same way.
    pub fn load_entries(&self) -> Result<BTreeMap<String, String>, SessionError> {
        let file = match File::open(&self.session_path) {
            Ok(f) => f,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.session_path.display(),
                    err
                );
                Ok(BTreeMap::new())
            }
        }
    }

    /// Load the session. Both entries must be present and the user entry
    /// must parse, otherwise there is no session.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let entries = self.load_entries()?;

        let Some(token) = entries.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let user = match entries.get(USER_KEY) {
            Some(raw) => match serde_json::from_str::<User>(raw) {
                Ok(user) => user,
                Err(err) => {
                    tracing::warn!("Stored user profile is not valid JSON: {}", err);
                    return Ok(None);
                }
            },
            None => return Ok(None),
        };

        Ok(Some(Session::new(token.clone(), user)))
    }

    /// Save the session, creating the parent directory if needed.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.session_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut entries = BTreeMap::new();
        entries.insert(TOKEN_KEY.to_string(), session.token.clone());
        entries.insert(USER_KEY.to_string(), serde_json::to_string(&session.user)?);

        let file = File::create(&self.session_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &entries)?;
        writer.flush()?;
        Ok(())
    }

    /// Remove the session file. Succeeds if it does not exist.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
