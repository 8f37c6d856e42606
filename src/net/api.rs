//! REST client for the FriendGift backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since every endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`. The error carries the
//! numeric HTTP status so callers can tell a registration conflict (409)
//! apart from generic failure. Any 401/403 response clears the session token
//! before the error surfaces, whichever operation triggered it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::net::types::{Friend, GiftIdea, LoginResponse};
use crate::state::session::Session;

/// Base URL used when `FRIENDGIFT_API_BASE_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Failure of a single API call. No retries anywhere; every failure is
/// terminal for that user action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never completed (network, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// A success response carried a body we could not decode.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// 409 — registration username collision.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// 401/403 — the credential was rejected and has been invalidated.
    pub fn is_unauthenticated(&self) -> bool {
        self.status().is_some_and(is_auth_failure)
    }
}

/// Statuses that invalidate the stored session token.
pub fn is_auth_failure(status: u16) -> bool {
    status == 401 || status == 403
}

/// Percent-encode one path segment (RFC 3986 unreserved set kept verbatim).
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn friend_path(id: &str) -> String {
    format!("/api/friends/{}", encode_path_segment(id))
}

fn ideas_path(friend_id: &str) -> String {
    format!("/api/friends/{}/ideas", encode_path_segment(friend_id))
}

/// HTTP verbs used by the API. Local enum so the public operations stay
/// feature-independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Client for the FriendGift REST API.
///
/// Holds the session handle it was constructed with; token invalidation on
/// 401/403 goes through that handle rather than any module-level state.
#[derive(Clone, Copy, Debug)]
pub struct ApiClient {
    base: &'static str,
    session: Session,
}

impl ApiClient {
    /// Build a client against the configured base URL.
    pub fn new(session: Session) -> Self {
        Self {
            base: option_env!("FRIENDGIFT_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
            session,
        }
    }

    /// `POST /api/auth/login` — exchange credentials for a session token.
    ///
    /// # Errors
    ///
    /// Any non-2xx status; callers show a generic auth message.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });
        let resp: LoginResponse = self
            .request_json(HttpMethod::Post, "/api/auth/login", Some(body))
            .await?;
        Ok(resp.token)
    }

    /// `POST /api/auth/register` — create an account and get a token.
    ///
    /// # Errors
    ///
    /// `ApiError::Status(409)` when the username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });
        let resp: LoginResponse = self
            .request_json(HttpMethod::Post, "/api/auth/register", Some(body))
            .await?;
        Ok(resp.token)
    }

    /// `GET /api/friends` — the caller's friends, order not guaranteed.
    ///
    /// # Errors
    ///
    /// 401/403 clears the session before the error is returned.
    pub async fn list_friends(&self) -> Result<Vec<Friend>, ApiError> {
        self.request_json(HttpMethod::Get, "/api/friends", None)
            .await
    }

    /// `POST /api/friends` — create a friend.
    ///
    /// # Errors
    ///
    /// Any non-2xx status.
    pub async fn create_friend(&self, name: &str) -> Result<Friend, ApiError> {
        let body = serde_json::json!({ "name": name });
        self.request_json(HttpMethod::Post, "/api/friends", Some(body))
            .await
    }

    /// `PUT /api/friends/{id}` — rename a friend.
    ///
    /// # Errors
    ///
    /// Any non-2xx status.
    pub async fn update_friend(&self, id: &str, name: &str) -> Result<Friend, ApiError> {
        let body = serde_json::json!({ "name": name });
        self.request_json(HttpMethod::Put, &friend_path(id), Some(body))
            .await
    }

    /// `DELETE /api/friends/{id}` — remove a friend. Success is a 204 with
    /// no body.
    ///
    /// # Errors
    ///
    /// Any non-2xx status.
    pub async fn delete_friend(&self, id: &str) -> Result<(), ApiError> {
        self.request_no_content(HttpMethod::Delete, &friend_path(id))
            .await
    }

    /// `GET /api/friends/{id}/ideas` — ideas for one friend, creation order.
    ///
    /// # Errors
    ///
    /// Any non-2xx status.
    pub async fn list_ideas(&self, friend_id: &str) -> Result<Vec<GiftIdea>, ApiError> {
        self.request_json(HttpMethod::Get, &ideas_path(friend_id), None)
            .await
    }

    /// `POST /api/friends/{id}/ideas` — record a new idea.
    ///
    /// # Errors
    ///
    /// Any non-2xx status.
    pub async fn add_idea(&self, friend_id: &str, text: &str) -> Result<GiftIdea, ApiError> {
        let body = serde_json::json!({ "text": text });
        self.request_json(HttpMethod::Post, &ideas_path(friend_id), Some(body))
            .await
    }

    /// Fetch the friend list and one friend's ideas concurrently, joined
    /// before rendering. The ideas page needs both.
    ///
    /// # Errors
    ///
    /// First failure of either call.
    #[cfg(feature = "hydrate")]
    pub async fn load_ideas_page(
        &self,
        friend_id: &str,
    ) -> Result<(Vec<Friend>, Vec<GiftIdea>), ApiError> {
        futures::future::try_join(self.list_friends(), self.list_ideas(friend_id)).await
    }

    /// SSR stub; the ideas page only loads data in the browser.
    ///
    /// # Errors
    ///
    /// Always.
    #[cfg(not(feature = "hydrate"))]
    pub async fn load_ideas_page(
        &self,
        friend_id: &str,
    ) -> Result<(Vec<Friend>, Vec<GiftIdea>), ApiError> {
        let _ = friend_id;
        Err(server_stub_error())
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    async fn request_json<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, body).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn request_no_content(&self, method: HttpMethod, path: &str) -> Result<(), ApiError> {
        self.send(method, path, None).await.map(|_| ())
    }

    /// Build, authorize and send one request; apply the global invalidation
    /// policy before any error is surfaced.
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::{Method, RequestBuilder};

        let url = format!("{}{path}", self.base);
        let method = match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Accept", "application/json");
        if let Some(token) = self.session.token_untracked() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .json(&json)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if is_auth_failure(status) {
            // Token rejected: drop it so the next protected navigation
            // redirects to login.
            self.session.clear();
        }
        if !resp.ok() {
            return Err(ApiError::Status(status));
        }
        Ok(resp)
    }
}

#[cfg(not(feature = "hydrate"))]
impl ApiClient {
    async fn request_json<T: DeserializeOwned>(
        &self,
        _method: HttpMethod,
        _path: &str,
        _body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        Err(server_stub_error())
    }

    async fn request_no_content(&self, _method: HttpMethod, _path: &str) -> Result<(), ApiError> {
        Err(server_stub_error())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub_error() -> ApiError {
    ApiError::Network("not available on the server".to_owned())
}
