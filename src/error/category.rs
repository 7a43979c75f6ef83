//! Error category classification.
//!
//! Categories are used for logging and for picking a fallback message when
//! a caller has no flow-specific wording to show.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failures, timeouts, unreadable responses.
    Network,

    /// The server rejected the credentials or the token (401/403).
    Auth,

    /// The server failed to handle the request (5xx).
    Server,

    /// The request itself was rejected (other 4xx).
    Client,

    /// Invalid input that never reached the network.
    User,

    /// Filesystem and OS errors, mostly from the session store.
    System,
}

impl ErrorCategory {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorCategory::Auth,
            500..=599 => ErrorCategory::Server,
            _ => ErrorCategory::Client,
        }
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorCategory::from_status(401), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_status(403), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_status(404), ErrorCategory::Client);
        assert_eq!(ErrorCategory::from_status(400), ErrorCategory::Client);
        assert_eq!(ErrorCategory::from_status(500), ErrorCategory::Server);
        assert_eq!(ErrorCategory::from_status(503), ErrorCategory::Server);
    }

    #[test]
    fn test_display_matches_as_str() {
        for category in [
            ErrorCategory::Network,
            ErrorCategory::Auth,
            ErrorCategory::Server,
            ErrorCategory::Client,
            ErrorCategory::User,
            ErrorCategory::System,
        ] {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
