//! Seams between the auth form and the outside world.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form controller only knows these two traits. In the browser they are
//! backed by the host's JSON API and the Leptos router; tests substitute
//! recording fakes.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;

use super::types::{SessionRef, SessionUserRef};
use crate::state::fields::{Credentials, SignUpFields};

/// Generic notice shown for any failure the user cannot fix by re-typing.
pub const GENERIC_NOTICE: &str = "Something went wrong. Please try again.";

/// Notice for refused credentials; the host sends the same text on a 401.
pub const REJECTED_NOTICE: &str = "Invalid email or password.";

/// Failure reported by the identity backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Credentials were understood and refused.
    #[error("credentials rejected")]
    Rejected,
    /// The request never produced a usable response.
    #[error("identity backend unavailable: {0}")]
    Unavailable(String),
    /// The backend answered with an error status.
    #[error("identity backend error {status}: {message}")]
    Backend { status: u16, message: String },
}

impl AuthError {
    /// User-facing text for the failure banner.
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Rejected => REJECTED_NOTICE,
            Self::Unavailable(_) | Self::Backend { .. } => GENERIC_NOTICE,
        }
    }
}

/// Identity/account backend used by the auth form.
#[async_trait(?Send)]
pub trait IdentityBackend {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the account could not be created.
    async fn sign_up(&self, fields: &SignUpFields) -> Result<SessionUserRef, AuthError>;

    /// Open a session. `Ok(None)` means the backend answered without a session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the request fails.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Option<SessionRef>, AuthError>;
}

/// Client-side navigation.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// [`IdentityBackend`] that talks to the host API from the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpIdentityBackend;

#[async_trait(?Send)]
impl IdentityBackend for HttpIdentityBackend {
    async fn sign_up(&self, fields: &SignUpFields) -> Result<SessionUserRef, AuthError> {
        super::api::sign_up(fields).await
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Option<SessionRef>, AuthError> {
        super::api::sign_in(credentials).await
    }
}
