//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemorySession`] - In-memory session storage
//! - [`ScriptedConfirm`] - Fixed-answer confirmation prompt

pub mod http;
pub mod prompt;
pub mod session;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use prompt::ScriptedConfirm;
pub use session::InMemorySession;
