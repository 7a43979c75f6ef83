//! Unified error type for blogdeck.
//!
//! `BlogError` consolidates the domain-specific error types so the API
//! client and the flows share one result type.

use std::fmt;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::validation::ValidationError;
use crate::traits::SessionError;

/// Unified error type.
#[derive(Debug)]
pub enum BlogError {
    /// Transport failures and non-2xx responses.
    Network(NetworkError),

    /// The session store could not be read or written.
    Session(SessionError),

    /// A form field was rejected before the request was made.
    Validation(ValidationError),

    /// The operation needs a signed-in user and there is none.
    NotSignedIn,
}

impl BlogError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BlogError::Network(NetworkError::HttpStatus { status, .. }) => {
                ErrorCategory::from_status(*status)
            }
            BlogError::Network(_) => ErrorCategory::Network,
            BlogError::Session(_) => ErrorCategory::System,
            BlogError::Validation(_) => ErrorCategory::User,
            BlogError::NotSignedIn => ErrorCategory::Auth,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            BlogError::Network(err) => err.user_message(),
            BlogError::Session(err) => format!("Could not access the saved session: {}", err),
            BlogError::Validation(err) => err.message.to_string(),
            BlogError::NotSignedIn => "Unauthorized".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            BlogError::Network(err) => err.error_code(),
            BlogError::Session(_) => "E_SESSION",
            BlogError::Validation(err) => err.error_code(),
            BlogError::NotSignedIn => "E_NOT_SIGNED_IN",
        }
    }

    /// HTTP status of the underlying response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            BlogError::Network(err) => err.status(),
            _ => None,
        }
    }
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogError::Network(err) => write!(f, "{}", err),
            BlogError::Session(err) => write!(f, "{}", err),
            BlogError::Validation(err) => write!(f, "{}: {}", err.field, err.message),
            BlogError::NotSignedIn => write!(f, "No user is signed in"),
        }
    }
}

impl std::error::Error for BlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlogError::Network(err) => Some(err),
            BlogError::Session(err) => Some(err),
            BlogError::Validation(err) => Some(err),
            BlogError::NotSignedIn => None,
        }
    }
}

impl From<NetworkError> for BlogError {
    fn from(err: NetworkError) -> Self {
        BlogError::Network(err)
    }
}

impl From<SessionError> for BlogError {
    fn from(err: SessionError) -> Self {
        BlogError::Session(err)
    }
}

impl From<ValidationError> for BlogError {
    fn from(err: ValidationError) -> Self {
        BlogError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_follows_status() {
        let unauthorized: BlogError = NetworkError::HttpStatus {
            status: 401,
            message: String::new(),
        }
        .into();
        assert_eq!(unauthorized.category(), ErrorCategory::Auth);

        let server: BlogError = NetworkError::HttpStatus {
            status: 502,
            message: String::new(),
        }
        .into();
        assert_eq!(server.category(), ErrorCategory::Server);

        let conn: BlogError = NetworkError::ConnectionFailed {
            url: "http://x".to_string(),
            message: "refused".to_string(),
        }
        .into();
        assert_eq!(conn.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_local_errors() {
        let validation: BlogError = ValidationError::required("title", "Title is required").into();
        assert_eq!(validation.category(), ErrorCategory::User);
        assert_eq!(validation.user_message(), "Title is required");

        assert!(BlogError::NotSignedIn.status().is_none());
        assert_eq!(BlogError::NotSignedIn.user_message(), "Unauthorized");
    }

    #[test]
    fn test_session_error_conversion() {
        let err: BlogError = SessionError::Io("disk full".to_string()).into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "E_SESSION");
        assert!(err.user_message().contains("disk full"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err: BlogError = NetworkError::Other {
            message: "boom".to_string(),
        }
        .into();
        assert!(err.source().is_some());
        assert!(BlogError::NotSignedIn.source().is_none());
    }
}
