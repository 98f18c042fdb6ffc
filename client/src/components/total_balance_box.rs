//! Bank count and aggregate balance card.

use leptos::prelude::*;

use crate::state::dashboard::{BalanceSummary, format_currency};

#[component]
pub fn TotalBalanceBox(summary: BalanceSummary) -> impl IntoView {
    view! {
        <section class="total-balance">
            <div class="total-balance__meta">
                <h2 class="header-2">{format!("Bank Accounts: {}", summary.total_banks)}</h2>
                <div class="total-balance__figure">
                    <p class="total-balance-label">"Total Current Balance"</p>
                    <p class="total-balance-amount">{format_currency(summary.total_current_balance)}</p>
                </div>
            </div>
        </section>
    }
}
