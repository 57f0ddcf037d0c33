//! REST helpers for the monitoring API and the identity provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers log and surface failures
//! (toast on the save path) instead of panicking, so a flaky backend never
//! breaks hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NormalizedRect, Session};
use crate::config::ClientConfig;

/// Failure talking to a remote service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Parse a `GET /coordinates` body. Empty bodies and `null` mean "nothing stored".
#[cfg(any(test, feature = "hydrate"))]
fn parse_coordinates_body(body: &str) -> Result<Option<NormalizedRect>, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<NormalizedRect>>(trimmed).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Statuses the identity provider uses for "no session".
#[cfg(any(test, feature = "hydrate"))]
fn is_signed_out_status(status: u16) -> bool {
    matches!(status, 401 | 403 | 404)
}

/// Fetch the persisted detection zone. Unauthenticated.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or a body that
/// is neither empty, `null`, nor a rectangle.
pub async fn fetch_coordinates(config: &ClientConfig) -> Result<Option<NormalizedRect>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.coordinates_url())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        parse_coordinates_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Persist the detection zone with the session's bearer token.
///
/// # Errors
///
/// Returns an error on encode/transport failure or a non-2xx status.
pub async fn save_coordinates(config: &ClientConfig, token: &str, rect: &NormalizedRect) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&config.coordinates_url())
            .header("Authorization", &bearer_header(token))
            .json(rect)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, rect);
        Err(ApiError::Unavailable)
    }
}

/// Ask the identity provider for the current session.
///
/// Returns `Ok(None)` when the provider says nobody is signed in.
///
/// # Errors
///
/// Returns an error on transport failure, unexpected statuses, or a
/// malformed session body.
pub async fn fetch_session(config: &ClientConfig) -> Result<Option<Session>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.session_url())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if is_signed_out_status(resp.status()) {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Option<Session>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// End the provider session.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx status.
pub async fn sign_out(config: &ClientConfig) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.logout_url())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}
