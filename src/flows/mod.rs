//! User-facing flows.
//!
//! Each flow wraps one or two API calls, turns any failure into a
//! [`crate::error::FlowError`] with a fixed message, and writes the session
//! store when authentication succeeds.

pub mod auth;
pub mod notice;
pub mod posts;

pub use auth::AuthFlow;
pub use notice::{Notice, NoticeKind};
pub use posts::{DeleteOutcome, PostFlow, PostList};
