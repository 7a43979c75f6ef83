//! Errors surfaced by user-facing flows.

use thiserror::Error;

use super::blog_error::BlogError;

/// A failed flow: a fixed, user-facing message plus the underlying cause.
///
/// Flows deliberately do not discriminate between causes when talking to
/// the user; the cause is kept for logging only.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FlowError {
    message: String,
    #[source]
    source: BlogError,
}

impl FlowError {
    pub fn new(message: impl Into<String>, source: BlogError) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    /// A local failure whose message is the cause's own user message
    /// (validation errors, missing session).
    pub fn local(source: BlogError) -> Self {
        Self {
            message: source.user_message(),
            source,
        }
    }

    /// The message shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying cause.
    pub fn source_error(&self) -> &BlogError {
        &self.source
    }
}
