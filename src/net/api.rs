//! REST helpers for the account API and static page fragments.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: stubs returning `ApiError::Unavailable`,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Response bodies are read as text
//! first and decoded by the pure helpers below so status/body interpretation
//! is testable without a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ErrorBody, is_truthy};
#[cfg(feature = "hydrate")]
use super::types::ForgotPasswordRequest;
use super::types::{LoginRequest, LoginResponse, UserProfile};

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Interpret a non-2xx response body.
///
/// A JSON body yields `Status` with its `message` when truthy; a body that is
/// not JSON at all is a decode failure.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ApiError::Status { status, message: parsed.message_text() },
        Err(e) => ApiError::Decode(e.to_string()),
    }
}

/// Decode a JSON response: the typed body on success, a `status_error` otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn decode_json<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    if !ok {
        return Err(status_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a profile response, rejecting bodies with a truthy `error` field.
#[cfg(any(test, feature = "hydrate"))]
fn decode_profile(status: u16, ok: bool, body: &str) -> Result<UserProfile, ApiError> {
    let value: serde_json::Value = decode_json(status, ok, body)?;
    if value.get("error").is_some_and(is_truthy) {
        return Err(ApiError::Rejected);
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a password-reset response. Any 2xx counts as sent, body or not.
#[cfg(any(test, feature = "hydrate"))]
fn decode_reset(status: u16, ok: bool, body: &str) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(status_error(status, body)) }
}

/// Decode a fragment response: raw text on success.
#[cfg(any(test, feature = "hydrate"))]
fn decode_fragment(status: u16, ok: bool, body: String) -> Result<String, ApiError> {
    if ok { Ok(body) } else { Err(ApiError::Status { status, message: None }) }
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<(u16, bool, String), ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, ok, body))
}

/// Fetch the signed-in user's profile with `GET <endpoint>` and a bearer token.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, an unparseable
/// body, or a body carrying a truthy `error` field.
pub async fn fetch_profile(endpoint: &str, token: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, ok, body) = read_body(resp).await?;
        decode_profile(status, ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, token);
        Err(ApiError::Unavailable)
    }
}

/// Sign in with `POST <endpoint>` and a JSON `{email, password, rememberMe}` body.
///
/// # Errors
///
/// Returns `ApiError::Status` with the server's `message` on rejection, or a
/// transport/decode error.
pub async fn login(endpoint: &str, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, ok, body) = read_body(resp).await?;
        decode_json(status, ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, request);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to email a reset link via `POST <endpoint>` with `{email}`.
///
/// # Errors
///
/// Returns `ApiError::Status` with the server's `message` on rejection, or a
/// transport error.
pub async fn request_password_reset(endpoint: &str, email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ForgotPasswordRequest { email: email.to_owned() };
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, ok, body) = read_body(resp).await?;
        decode_reset(status, ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, email);
        Err(ApiError::Unavailable)
    }
}

/// Tell the backend the session is over via `POST <endpoint>`.
///
/// The outcome is ignored; callers clear local state regardless.
pub async fn logout(endpoint: &str, token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(endpoint);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_header(token));
        }
        let _ = req.send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, token);
    }
}

/// Fetch a static HTML fragment as text.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn fetch_fragment(url: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, ok, body) = read_body(resp).await?;
        decode_fragment(status, ok, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}
