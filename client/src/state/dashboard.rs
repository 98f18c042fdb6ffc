//! Dashboard view model: greeting, balance summary, sidebar data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page is pure composition over a `DashboardSnapshot`. The
//! snapshot carries both per-account balances and an optional explicit
//! total; the explicit total is authoritative and the account list is
//! display-only whenever both are present.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Account, DashboardSnapshot, Transaction, UserProfile};

/// Name shown when nobody (or an unnamed user) is signed in.
pub const GUEST_NAME: &str = "Guest";

/// Rows shown in a recent-transactions list.
pub const RECENT_TRANSACTIONS_LIMIT: usize = 5;

/// Empty-state line for a recent-transactions list.
pub const NO_TRANSACTIONS: &str = "No recent transactions";

/// Fetch status for the dashboard snapshot.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub snapshot: Option<DashboardSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Shown when the dashboard snapshot cannot be fetched.
pub const LOAD_FAILED: &str = "Could not load your accounts.";

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a fetch result. A failed fetch keeps the previous snapshot.
    pub fn finish_load(&mut self, snapshot: Option<DashboardSnapshot>) {
        self.loading = false;
        match snapshot {
            Some(snapshot) => {
                self.snapshot = Some(snapshot);
                self.error = None;
            }
            None => self.error = Some(LOAD_FAILED.to_owned()),
        }
    }

    /// Snapshot to render; empty until the first successful fetch.
    #[must_use]
    pub fn current(&self) -> DashboardSnapshot {
        self.snapshot.clone().unwrap_or_default()
    }
}

/// Figures rendered by the total-balance box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceSummary {
    pub total_banks: u32,
    pub total_current_balance: f64,
}

impl BalanceSummary {
    #[must_use]
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let total_banks = snapshot
            .total_banks
            .unwrap_or_else(|| u32::try_from(snapshot.accounts.len()).unwrap_or(u32::MAX));
        let total_current_balance = snapshot
            .total_current_balance
            .unwrap_or_else(|| sum_balances(&snapshot.accounts));
        Self { total_banks, total_current_balance }
    }
}

/// Leading slice of `transactions` for a recent-transactions list.
#[must_use]
pub fn recent_transactions(transactions: &[Transaction]) -> &[Transaction] {
    &transactions[..transactions.len().min(RECENT_TRANSACTIONS_LIMIT)]
}

#[must_use]
pub fn sum_balances(accounts: &[Account]) -> f64 {
    accounts.iter().map(|a| a.current_balance).sum()
}

/// First name for the greeting header, falling back to [`GUEST_NAME`].
#[must_use]
pub fn greeting_name(user: Option<&UserProfile>) -> &str {
    user.map(|u| u.first_name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(GUEST_NAME)
}

/// Full name for the sidebar profile card.
#[must_use]
pub fn display_name(user: &UserProfile) -> String {
    let full = format!("{} {}", user.first_name.trim(), user.last_name.trim());
    let full = full.trim();
    if full.is_empty() { GUEST_NAME.to_owned() } else { full.to_owned() }
}

/// Two initials for the avatar bubble.
#[must_use]
pub fn initials(user: &UserProfile) -> String {
    [&user.first_name, &user.last_name]
        .iter()
        .filter_map(|part| part.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// US-dollar rendering: `$1,250.35`, `-$12.00`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}
