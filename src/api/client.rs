//! HTTP client for the blog REST API.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{BlogResult, NetworkError};
use crate::models::{Id, LoginRequest, LoginResponse, Post, PostPayload, RegisterRequest};
use crate::traits::{Headers, HttpClient, Response, SessionStore};

/// Header carrying the bearer credential.
pub const AUTHORIZATION: &str = "Authorization";

const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Client for the blog API, bound to one base URL.
///
/// Every request goes through [`BlogApi::request_headers`], which attaches
/// the stored session token as a bearer credential when there is one.
/// There is no retry and no caching; a non-2xx status is an error.
#[derive(Clone)]
pub struct BlogApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
    session: Arc<dyn SessionStore>,
}

impl BlogApi {
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store the interceptor reads from.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Build the headers for an outgoing request.
    ///
    /// `Authorization: Bearer <token>` is present iff the session store
    /// holds a token at the time of the call.
    pub async fn request_headers(&self, has_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if has_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = self.session.token().await {
            headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// POST /register
    ///
    /// The response body is not used; only the status matters.
    pub async fn register(&self, request: &RegisterRequest) -> BlogResult<()> {
        let body = encode(request)?;
        self.send(Method::Post, "/register", Some(body)).await?;
        Ok(())
    }

    /// POST /login
    pub async fn login(&self, request: &LoginRequest) -> BlogResult<LoginResponse> {
        let body = encode(request)?;
        let response = self.send(Method::Post, "/login", Some(body)).await?;
        decode(&response)
    }

    /// GET /posts
    pub async fn list_posts(&self) -> BlogResult<Vec<Post>> {
        let response = self.send(Method::Get, "/posts", None).await?;
        decode(&response)
    }

    /// GET /posts/:id
    pub async fn get_post(&self, id: &Id) -> BlogResult<Post> {
        let response = self.send(Method::Get, &post_path(id), None).await?;
        decode(&response)
    }

    /// POST /posts
    pub async fn create_post(&self, payload: &PostPayload) -> BlogResult<Post> {
        let body = encode(payload)?;
        let response = self.send(Method::Post, "/posts", Some(body)).await?;
        decode(&response)
    }

    /// PUT /posts/:id (full replace)
    pub async fn update_post(&self, id: &Id, payload: &PostPayload) -> BlogResult<Post> {
        let body = encode(payload)?;
        let response = self.send(Method::Put, &post_path(id), Some(body)).await?;
        decode(&response)
    }

    /// DELETE /posts/:id
    pub async fn delete_post(&self, id: &Id) -> BlogResult<()> {
        self.send(Method::Delete, &post_path(id), None).await?;
        Ok(())
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> BlogResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.request_headers(body.is_some()).await;

        tracing::debug!(
            method = method.as_str(),
            url = %url,
            authenticated = headers.contains_key(AUTHORIZATION),
            "Sending request"
        );

        let result = match (method, body.as_deref()) {
            (Method::Get, _) => self.http.get(&url, &headers).await,
            (Method::Delete, _) => self.http.delete(&url, &headers).await,
            (Method::Post, body) => self.http.post(&url, body.unwrap_or(""), &headers).await,
            (Method::Put, body) => self.http.put(&url, body.unwrap_or(""), &headers).await,
        };

        let response = result.map_err(|err| {
            tracing::debug!("{} {} failed: {}", method.as_str(), url, err);
            NetworkError::from_http(err, &url)
        })?;

        if !response.is_success() {
            let message = error_message(&response);
            tracing::debug!(
                "{} {} returned {}: {}",
                method.as_str(),
                url,
                response.status,
                message
            );
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message,
            }
            .into());
        }

        Ok(response)
    }
}

fn post_path(id: &Id) -> String {
    format!("/posts/{}", urlencoding::encode(&id.as_str()))
}

fn encode<T: Serialize>(value: &T) -> BlogResult<String> {
    serde_json::to_string(value).map_err(|e| {
        NetworkError::Other {
            message: format!("Failed to encode request: {}", e),
        }
        .into()
    })
}

fn decode<T: DeserializeOwned>(response: &Response) -> BlogResult<T> {
    response.json().map_err(|e| NetworkError::from(e).into())
}

/// Pull a readable message out of an error body. The backend answers with
/// either a bare JSON string, an object with `message`/`error`, or text.
fn error_message(response: &Response) -> String {
    if let Ok(value) = response.json::<serde_json::Value>() {
        if let Some(text) = value.as_str() {
            return text.to_string();
        }
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    let text = response.text_lossy();
    let text = text.trim();
    if text.is_empty() {
        return format!("HTTP {}", response.status);
    }
    text.chars().take(MAX_ERROR_BODY).collect()
}
