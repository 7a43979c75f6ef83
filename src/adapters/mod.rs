//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSessionStore`] - File-based session storage
//! - [`StdinConfirm`] / [`Preanswered`] - Confirmation prompts
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemorySession`] - In-memory session storage
//! - [`mock::ScriptedConfirm`] - Fixed-answer prompt

pub mod file_session;
pub mod mock;
pub mod reqwest_http;
pub mod terminal_prompt;

pub use file_session::FileSessionStore;
pub use mock::{InMemorySession, MockHttpClient, MockResponse, ScriptedConfirm};
pub use reqwest_http::ReqwestHttpClient;
pub use terminal_prompt::{Preanswered, StdinConfirm};
