//! Dashboard snapshot source.
//!
//! Account aggregation is not wired to a bank backend yet; the landing page
//! is served a fixed sample so the UI renders real figures.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use client::net::types::{Account, DashboardSnapshot, UserProfile};

/// Sample data for `GET /api/dashboard`.
#[must_use]
pub fn sample_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        user: Some(UserProfile {
            first_name: "Jordan".to_owned(),
            last_name: "Rivera".to_owned(),
            email: "jordan@example.com".to_owned(),
        }),
        accounts: vec![
            Account { id: "acct-checking".to_owned(), name: "Checking".to_owned(), current_balance: 500.0 },
            Account { id: "acct-savings".to_owned(), name: "Savings".to_owned(), current_balance: 123.0 },
        ],
        transactions: Vec::new(),
        total_banks: Some(1),
        total_current_balance: Some(1250.35),
    }
}
