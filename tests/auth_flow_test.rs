//! Login, signup and logout against a mock server with a file-backed session.

mod common;

use blogdeck::flows::AuthFlow;
use blogdeck::session::{SessionManager, SESSION_FILE};
use common::*;
use serde_json::json;
use std::collections::BTreeMap;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_stores_exactly_token_and_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_json()))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let flow = AuthFlow::new(file_api(&server.uri(), temp_dir.path()));

    let session = flow.login("ada@example.com", "pw").await.unwrap();
    assert_eq!(session, ada_session());

    let entries: BTreeMap<String, String> = SessionManager::in_dir(temp_dir.path())
        .load_entries()
        .unwrap();
    assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["token", "user"]);
    assert_eq!(entries["token"], TOKEN);
    let user: serde_json::Value = serde_json::from_str(&entries["user"]).unwrap();
    assert_eq!(user["name"], "Ada");

    assert_eq!(flow.current_user().await, Some(ada()));
}

#[tokio::test]
async fn test_failed_login_leaves_session_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Bad password"})))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let manager = SessionManager::in_dir(temp_dir.path());
    let existing = blogdeck::session::Session::new(
        "older-token",
        blogdeck::models::User::new(9u64, "Grace", "grace@example.com"),
    );
    manager.save(&existing).unwrap();

    let flow = AuthFlow::new(file_api(&server.uri(), temp_dir.path()));
    let err = flow.login("ada@example.com", "wrong").await.unwrap_err();

    assert_eq!(err.message(), "Invalid credentials");
    assert_eq!(manager.load().unwrap(), Some(existing));
}

#[tokio::test]
async fn test_signup_registers_then_logs_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "pw",
            "name": "Ada"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_json()))
        .expect(1)
        .mount(&server)
        .await;

    let (api, store) = in_memory_api(&server.uri(), None);
    let session = AuthFlow::new(api)
        .signup("Ada", "ada@example.com", "pw")
        .await
        .unwrap();

    assert_eq!(session.token, TOKEN);
    assert_eq!(store.snapshot(), Some(ada_session()));

    let order: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(order, vec!["/register", "/login"]);
}

#[tokio::test]
async fn test_signup_rejected_skips_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Email already exists"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_json()))
        .expect(0)
        .mount(&server)
        .await;

    let (api, store) = in_memory_api(&server.uri(), None);
    let err = AuthFlow::new(api)
        .signup("Ada", "ada@example.com", "pw")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Signup failed. Try a different email.");
    assert!(store.snapshot().is_none());
}

#[tokio::test]
async fn test_signup_registered_but_login_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let (api, store) = in_memory_api(&server.uri(), None);
    let err = AuthFlow::new(api)
        .signup("Ada", "ada@example.com", "pw")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Signup failed. Try a different email.");
    assert_eq!(err.source_error().status(), Some(500));
    assert!(store.snapshot().is_none());

    let order: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(order, vec!["/register", "/login"]);
}

#[tokio::test]
async fn test_logout_removes_session_file() {
    let temp_dir = TempDir::new().unwrap();
    let manager = SessionManager::in_dir(temp_dir.path());
    manager.save(&ada_session()).unwrap();
    assert!(temp_dir.path().join(SESSION_FILE).exists());

    // Logout never reaches the server
    let flow = AuthFlow::new(file_api("http://127.0.0.1:9", temp_dir.path()));
    flow.logout().await.unwrap();

    assert!(!temp_dir.path().join(SESSION_FILE).exists());
    assert!(flow.current_user().await.is_none());
}
