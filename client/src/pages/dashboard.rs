//! Dashboard landing page: greeting, balance summary and sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/`. The snapshot is fetched once per mount in the browser; the
//! server render and the first client render both show the empty snapshot so
//! hydration lines up.

use leptos::prelude::*;

use crate::components::header_box::HeaderBox;
use crate::components::recent_transactions::RecentTransactions;
use crate::components::right_sidebar::RightSidebar;
use crate::components::total_balance_box::TotalBalanceBox;
use crate::state::dashboard::{BalanceSummary, DashboardState, greeting_name};

const WELCOME_SUBTEXT: &str = "Access and manage your account and transactions efficiently.";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        dashboard.update(DashboardState::begin_load);
        let snapshot = crate::net::api::fetch_dashboard().await;
        if snapshot.is_none() {
            log::warn!("dashboard: snapshot fetch failed");
        }
        dashboard.update(|d| d.finish_load(snapshot));
    });

    let greeting = move || {
        let name = dashboard.with(|d| greeting_name(d.snapshot.as_ref().and_then(|s| s.user.as_ref())).to_owned());
        view! { <HeaderBox title="Welcome," user=name subtext=WELCOME_SUBTEXT/> }
    };
    let balance = move || {
        let summary = dashboard.with(|d| d.snapshot.as_ref().map(BalanceSummary::from_snapshot));
        let summary = summary.unwrap_or(BalanceSummary { total_banks: 0, total_current_balance: 0.0 });
        view! { <TotalBalanceBox summary=summary/> }
    };
    let transactions = move || {
        let transactions = dashboard.with(|d| d.current().transactions);
        view! { <RecentTransactions transactions=transactions class="home-transactions"/> }
    };
    let sidebar = move || {
        let snapshot = dashboard.with(DashboardState::current);
        view! { <RightSidebar user=snapshot.user transactions=snapshot.transactions banks=snapshot.accounts/> }
    };

    view! {
        <section class="home">
            <div class="home-content">
                <header class="home-header">
                    {greeting}
                    {balance}
                </header>
                <Show when=move || dashboard.with(|d| d.loading)>
                    <p class="home-status">"Loading accounts..."</p>
                </Show>
                <Show when=move || dashboard.with(|d| d.error.is_some())>
                    <p class="home-status home-status--error">
                        {move || dashboard.with(|d| d.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                {transactions}
            </div>
            {sidebar}
        </section>
    }
}
