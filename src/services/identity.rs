//! Identity backend client: account creation, sign-in, bank-link tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the identity backend directly. Auth routes
//! validate the request body, then forward it through [`IdentityApi`]. The
//! trait seam lets route tests substitute an in-memory backend.
//!
//! TIMEOUTS
//! ========
//! Every request is bounded by `IDENTITY_TIMEOUT_SECS`. A hung upstream
//! surfaces as [`IdentityError::Transport`], which the routes turn into a
//! 502 so the form leaves its loading state.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::time::Duration;

use async_trait::async_trait;
use client::net::types::{LinkToken, LinkTokenRequest, SessionRef, SessionUserRef};
use client::state::fields::{Credentials, SignUpFields};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::IdentityTimeouts;

pub const SIGN_UP_PATH: &str = "/sign-up";
pub const SIGN_IN_PATH: &str = "/sign-in";
pub const LINK_TOKEN_PATH: &str = "/link-token";

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity backend rejected the credentials")]
    Rejected,
    #[error("identity backend unreachable: {0}")]
    Transport(String),
    #[error("identity backend returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("unexpected identity backend response: {0}")]
    Decode(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

/// Operations the host forwards to the identity backend.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    async fn sign_up(&self, fields: &SignUpFields) -> Result<SessionUserRef, IdentityError>;

    /// Returns [`IdentityError::Rejected`] for unknown accounts or a wrong password.
    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionRef, IdentityError>;

    async fn create_link_token(&self, request: &LinkTokenRequest) -> Result<LinkToken, IdentityError>;
}

/// Which upstream statuses mean "credentials refused" for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refusal {
    Rejects,
    Upstream,
}

/// Map a non-success upstream status to an error.
fn classify_status(status: u16, body: String, refusal: Refusal) -> IdentityError {
    match (status, refusal) {
        (401 | 403, Refusal::Rejects) => IdentityError::Rejected,
        _ => IdentityError::Upstream { status, body },
    }
}

/// `reqwest` implementation of [`IdentityApi`].
#[derive(Debug, Clone)]
pub struct HttpIdentityApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIdentityApi {
    /// # Errors
    ///
    /// Returns [`IdentityError::HttpClientBuild`] if the TLS backend cannot
    /// be initialized.
    pub fn new(base_url: impl Into<String>, timeouts: IdentityTimeouts) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post<B, R>(&self, path: &str, body: &B, refusal: Refusal) -> Result<R, IdentityError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let resp = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), body, refusal));
        }

        resp.json::<R>().await.map_err(|e| IdentityError::Decode(e.to_string()))
    }
}

#[async_trait]
impl IdentityApi for HttpIdentityApi {
    async fn sign_up(&self, fields: &SignUpFields) -> Result<SessionUserRef, IdentityError> {
        self.post(SIGN_UP_PATH, fields, Refusal::Upstream).await
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionRef, IdentityError> {
        self.post(SIGN_IN_PATH, credentials, Refusal::Rejects).await
    }

    async fn create_link_token(&self, request: &LinkTokenRequest) -> Result<LinkToken, IdentityError> {
        self.post(LINK_TOKEN_PATH, request, Refusal::Upstream).await
    }
}
