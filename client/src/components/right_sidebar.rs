//! Profile card, linked banks, and recent transactions beside the dashboard.

use leptos::prelude::*;

use crate::components::recent_transactions::RecentTransactions;
use crate::net::types::{Account, Transaction, UserProfile};
use crate::state::dashboard::{GUEST_NAME, display_name, format_currency, initials};

#[component]
pub fn RightSidebar(user: Option<UserProfile>, transactions: Vec<Transaction>, banks: Vec<Account>) -> impl IntoView {
    let (name, email, avatar) = match &user {
        Some(u) => (display_name(u), u.email.clone(), initials(u)),
        None => (GUEST_NAME.to_owned(), String::new(), "G".to_owned()),
    };
    let bank_count = banks.len();

    view! {
        <aside class="right-sidebar">
            <section class="profile-banner">
                <div class="profile-img">
                    <span class="profile-img__initials">{avatar}</span>
                </div>
                <div class="profile-details">
                    <h1 class="profile-name">{name}</h1>
                    <p class="profile-email">{email}</p>
                </div>
            </section>

            <section class="banks">
                <div class="banks__header">
                    <h2 class="header-2">"My Banks"</h2>
                    <span class="banks__count">{format!("{bank_count} linked")}</span>
                </div>
                <ul class="banks__list">
                    {banks
                        .into_iter()
                        .map(|bank| {
                            let label = if bank.name.is_empty() { "Bank account".to_owned() } else { bank.name };
                            view! {
                                <li class="bank-card">
                                    <span class="bank-card__name">{label}</span>
                                    <span class="bank-card__balance">{format_currency(bank.current_balance)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <RecentTransactions transactions=transactions class="sidebar-transactions"/>
        </aside>
    }
}
