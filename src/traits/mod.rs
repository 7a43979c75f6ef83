//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`SessionStore`] - Session storage and retrieval
//! - [`Confirm`] - Blocking yes/no prompt before destructive actions

pub mod http;
pub mod prompt;
pub mod session;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use prompt::Confirm;
pub use session::{SessionError, SessionStore};
