//! REST API helpers for communicating with the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! dashboard fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::identity::AuthError;
use super::types::{DashboardSnapshot, LinkToken, SessionRef, SessionUserRef};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiError;
use crate::state::fields::{Credentials, SignUpFields};

pub const SIGN_UP_ENDPOINT: &str = "/api/auth/sign-up";
pub const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in";
pub const LINK_TOKEN_ENDPOINT: &str = "/api/link/token";
pub const DASHBOARD_ENDPOINT: &str = "/api/dashboard";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

/// Map a non-OK response to an [`AuthError`].
#[cfg(any(test, feature = "hydrate"))]
fn auth_error_for_status(status: u16, body: Option<ApiError>) -> AuthError {
    match status {
        401 | 403 => AuthError::Rejected,
        _ => AuthError::Backend {
            status,
            message: body
                .map(|b| b.error)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| format!("request failed: {status}")),
        },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn link_token_failed_message(status: u16) -> String {
    format!("link token request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Response, AuthError> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Unavailable(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Unavailable(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    let body = resp.json::<ApiError>().await.ok();
    auth_error_for_status(status, body)
}

/// Create an account via `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request fails or the host rejects it.
pub async fn sign_up(fields: &SignUpFields) -> Result<SessionUserRef, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(SIGN_UP_ENDPOINT, fields).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<SessionUserRef>()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err(AuthError::Unavailable(NOT_AVAILABLE.to_owned()))
    }
}

/// Open a session via `POST /api/auth/sign-in`.
///
/// A `401` answer is "no session" rather than an error.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request fails or the host answers with
/// any other non-OK status.
pub async fn sign_in(credentials: &Credentials) -> Result<Option<SessionRef>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(SIGN_IN_ENDPOINT, credentials).await?;
        if resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<SessionRef>()
            .await
            .map(Some)
            .map_err(|e| AuthError::Unavailable(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(AuthError::Unavailable(NOT_AVAILABLE.to_owned()))
    }
}

/// Request a bank-link token for a freshly created account.
///
/// # Errors
///
/// Returns an error string if the request fails or the host answers non-OK.
pub async fn create_link_token(user: &SessionUserRef) -> Result<LinkToken, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LinkTokenRequest { user_id: user.user_id.clone() };
        let resp = gloo_net::http::Request::post(LINK_TOKEN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(link_token_failed_message(resp.status()));
        }
        resp.json::<LinkToken>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the dashboard snapshot from `/api/dashboard`.
/// Returns `None` on failure or on the server.
pub async fn fetch_dashboard() -> Option<DashboardSnapshot> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DASHBOARD_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<DashboardSnapshot>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
