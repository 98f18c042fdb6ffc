//! Shared wire DTOs for the browser/host boundary.
//!
//! DESIGN
//! ======
//! The host reuses these types for its own JSON API, so both sides agree on
//! camelCase keys without a separate schema crate. Identifiers handed out by
//! the identity backend stay opaque strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Account reference returned by a successful sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserRef {
    /// Backend-issued user identifier.
    pub user_id: String,
}

/// Session reference returned by a successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRef {
    /// Backend-issued session identifier.
    pub session_id: String,
}

/// Request body for `POST /api/link/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTokenRequest {
    pub user_id: String,
}

/// Token the bank-linking widget is opened with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkToken {
    pub link_token: String,
}

/// Error body returned by the host API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Short machine-readable reason.
    pub error: String,
    /// Inline messages keyed by field wire name, present on `422`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

/// Profile shown in the dashboard greeting and sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// A linked bank account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub current_balance: f64,
}

/// A posted transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: f64,
    /// ISO 8601 date.
    pub date: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Everything the dashboard renders, as supplied by upstream providers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Explicit bank count; wins over `accounts.len()` when present.
    #[serde(default)]
    pub total_banks: Option<u32>,
    /// Explicit total; wins over the per-account sum when present.
    #[serde(default)]
    pub total_current_balance: Option<f64>,
}
