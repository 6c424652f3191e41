//! REST API client for the feed backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Endpoint functions only build an `ApiRequest` (method, path, JSON body);
//! `ApiClient` owns the base URL, header preparation and status handling.
//! Every request carries `Authorization: Bearer <token>` when the token store
//! has one.
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the stored token, emits `Cleared(Expired)` on the session
//! channel when one is attached, and surfaces `ApiError::Unauthorized`. The
//! client never retries and never navigates; the route guard reacts to the
//! session change instead.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::User;
use crate::state::session::{ClearReason, SessionEvents};
use crate::util::token_store::TokenStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the bearer token (HTTP 401).
    #[error("authentication expired or invalid")]
    Unauthorized,

    /// Any other non-success HTTP status.
    #[error("request failed: status {status}")]
    Status { status: u16 },

    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Transport(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be serialized.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

pub mod auth {
    use super::{ApiError, ApiRequest};
    use crate::net::types::{Credentials, Registration};

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if the body cannot be serialized.
    pub fn login(credentials: &Credentials) -> Result<ApiRequest, ApiError> {
        ApiRequest::post("/auth/login").with_json(credentials)
    }

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if the body cannot be serialized.
    pub fn register(registration: &Registration) -> Result<ApiRequest, ApiError> {
        ApiRequest::post("/auth/register").with_json(registration)
    }

    /// `GET /auth/me`
    pub fn me() -> ApiRequest {
        ApiRequest::get("/auth/me")
    }
}

pub mod posts {
    use super::{ApiError, ApiRequest};
    use crate::net::types::NewPost;

    /// `POST /posts`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if the body cannot be serialized.
    pub fn create(post: &NewPost) -> Result<ApiRequest, ApiError> {
        ApiRequest::post("/posts").with_json(post)
    }

    /// `GET /posts`, optionally paged.
    pub fn list(page: Option<u32>) -> ApiRequest {
        match page {
            Some(page) => ApiRequest::get(format!("/posts?page={page}")),
            None => ApiRequest::get("/posts"),
        }
    }

    pub fn get(post_id: u64) -> ApiRequest {
        ApiRequest::get(format!("/posts/{post_id}"))
    }

    /// `PUT /posts/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if the body cannot be serialized.
    pub fn update(post_id: u64, post: &NewPost) -> Result<ApiRequest, ApiError> {
        ApiRequest::put(format!("/posts/{post_id}")).with_json(post)
    }

    pub fn delete(post_id: u64) -> ApiRequest {
        ApiRequest::delete(format!("/posts/{post_id}"))
    }

    pub fn like(post_id: u64) -> ApiRequest {
        ApiRequest::post(format!("/posts/{post_id}/like"))
    }

    pub fn unlike(post_id: u64) -> ApiRequest {
        ApiRequest::delete(format!("/posts/{post_id}/like"))
    }
}

pub mod users {
    use super::ApiRequest;

    pub fn profile(user_id: u64) -> ApiRequest {
        ApiRequest::get(format!("/users/{user_id}/profile"))
    }

    pub fn friends(user_id: u64) -> ApiRequest {
        ApiRequest::get(format!("/users/{user_id}/friends"))
    }

    pub fn send_friend_request(target_user_id: u64) -> ApiRequest {
        ApiRequest::post(format!("/users/{target_user_id}/friend-request"))
    }

    pub fn accept_friend_request(requester_id: u64) -> ApiRequest {
        ApiRequest::post(format!("/users/friend-request/{requester_id}/accept"))
    }

    pub fn reject_friend_request(requester_id: u64) -> ApiRequest {
        ApiRequest::delete(format!("/users/friend-request/{requester_id}/reject"))
    }

    /// `GET /users/search?q=...` with the query form-encoded.
    pub fn search(query: &str) -> ApiRequest {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        ApiRequest::get(format!("/users/search?q={encoded}"))
    }
}

pub mod comments {
    use super::{ApiError, ApiRequest};
    use crate::net::types::NewComment;

    pub fn list(post_id: u64) -> ApiRequest {
        ApiRequest::get(format!("/posts/{post_id}/comments"))
    }

    /// `POST /posts/{id}/comments`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if the body cannot be serialized.
    pub fn add(post_id: u64, comment: &NewComment) -> Result<ApiRequest, ApiError> {
        ApiRequest::post(format!("/posts/{post_id}/comments")).with_json(comment)
    }

    pub fn delete(post_id: u64, comment_id: u64) -> ApiRequest {
        ApiRequest::delete(format!("/posts/{post_id}/comments/{comment_id}"))
    }
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    events: Option<SessionEvents>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.tokens.get().is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, tokens, events: None }
    }

    /// Emit `Cleared(Expired)` on `events` whenever a request comes back 401.
    #[must_use]
    pub fn with_session_events(mut self, events: SessionEvents) -> Self {
        self.events = Some(events);
        self
    }

    /// A copy that does not report 401s to the session channel.
    ///
    /// The session check uses this: its own 401 already resolves the check.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self { events: None, ..self.clone() }
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }

    /// Map an HTTP status to the client's error contract.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for 401 (after clearing the token), `Status` for any
    /// other non-2xx status.
    pub fn check_status(&self, status: u16) -> Result<(), ApiError> {
        match status {
            200..=299 => Ok(()),
            401 => {
                log::warn!("api: authentication expired or invalid, clearing stored token");
                self.tokens.clear();
                if let Some(events) = &self.events {
                    events.clear(ClearReason::Expired);
                }
                Err(ApiError::Unauthorized)
            }
            status => Err(ApiError::Status { status }),
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send(&self, request: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in self.headers() {
            builder = builder.header(name, &value);
        }
        let built = match &request.body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Transport(e.to_string()))?,
        };
        let resp = built.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        self.check_status(resp.status())?;
        Ok(resp)
    }

    /// Execute `request` and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` for the failing stage.
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send(&request).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// Execute `request`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` for the failing stage.
    pub async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send(&request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the visitor behind the stored token via `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` for the failing stage.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(auth::me()).await
    }
}
