//! One-line user notices.

use crate::error::FlowError;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A short message for the user: printed by CLI commands, shown in the
/// status line of the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<&FlowError> for Notice {
    fn from(err: &FlowError) -> Self {
        Notice::error(err.message())
    }
}

impl From<FlowError> for Notice {
    fn from(err: FlowError) -> Self {
        Notice::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;

    #[test]
    fn test_from_flow_error_uses_fixed_message() {
        let err = FlowError::new("Failed to load posts", BlogError::NotSignedIn);
        let notice = Notice::from(&err);
        assert!(notice.is_error());
        assert_eq!(notice.message, "Failed to load posts");
    }
}
