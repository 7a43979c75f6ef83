//! Common fixtures for integration tests.
//!
//! Tests run the real reqwest client against a wiremock server, with the
//! session kept either in memory or in a temporary directory.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let (api, session) = in_memory_api(&server.uri(), None);
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use blogdeck::adapters::{FileSessionStore, InMemorySession, ReqwestHttpClient};
use blogdeck::api::BlogApi;
use blogdeck::models::User;
use blogdeck::session::Session;
use serde_json::{json, Value};

pub const TOKEN: &str = "test-token-abc";

pub fn ada() -> User {
    User::new(1u64, "Ada", "ada@example.com")
}

pub fn ada_session() -> Session {
    Session::new(TOKEN, ada())
}

/// Wire form of a post owned by `user_id`.
pub fn post_json(id: u64, user_id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Post {}", id),
        "description": "Body text",
        "imageUrl": "https://example.com/cover.png",
        "category": "Tech",
        "author": "Ada",
        "date": "3/4/2025",
        "userId": user_id
    })
}

pub fn login_json() -> Value {
    json!({
        "accessToken": TOKEN,
        "user": {"id": 1, "name": "Ada", "email": "ada@example.com"}
    })
}

/// API client backed by an in-memory session.
pub fn in_memory_api(base_url: &str, session: Option<Session>) -> (BlogApi, InMemorySession) {
    let store = match session {
        Some(session) => InMemorySession::with_session(session),
        None => InMemorySession::new(),
    };
    let api = BlogApi::new(
        base_url,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(store.clone()),
    );
    (api, store)
}

/// API client backed by a session file under `dir`.
pub fn file_api(base_url: &str, dir: &std::path::Path) -> BlogApi {
    BlogApi::new(
        base_url,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(FileSessionStore::in_dir(dir)),
    )
}
