//! Result type aliases.

use super::blog_error::BlogError;
use super::flow::FlowError;

/// Result of an API client or session operation.
pub type BlogResult<T> = Result<T, BlogError>;

/// Result of a user-facing flow.
pub type FlowResult<T> = Result<T, FlowError>;

/// Extension trait for attaching a flow's fixed message to a failure.
pub trait ResultExt<T> {
    /// Replace the error with a [`FlowError`] carrying `message`, keeping the
    /// original error as its source.
    fn or_notice(self, message: &'static str) -> FlowResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BlogError>,
{
    fn or_notice(self, message: &'static str) -> FlowResult<T> {
        self.map_err(|err| FlowError::new(message, err.into()))
    }
}
