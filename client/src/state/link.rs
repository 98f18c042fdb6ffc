//! Bank-link step shown after a successful sign-up.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use crate::net::types::LinkToken;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkStatus {
    #[default]
    Idle,
    Requesting,
    Ready(LinkToken),
    Failed(String),
}

impl LinkStatus {
    /// Move to `Requesting`. Returns `false` when a request is already pending
    /// or a token is already in hand.
    pub fn begin_request(&mut self) -> bool {
        match self {
            Self::Idle | Self::Failed(_) => {
                *self = Self::Requesting;
                true
            }
            Self::Requesting | Self::Ready(_) => false,
        }
    }

    pub fn finish(&mut self, result: Result<LinkToken, String>) {
        if *self != Self::Requesting {
            return;
        }
        *self = match result {
            Ok(token) => Self::Ready(token),
            Err(e) => Self::Failed(e),
        };
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Idle => "Connect bank",
            Self::Requesting => "Connecting...",
            Self::Ready(_) => "Bank link ready",
            Self::Failed(_) => "Try again",
        }
    }
}
