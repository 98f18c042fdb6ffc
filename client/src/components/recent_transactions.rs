//! Recent-transactions list shared by the dashboard body and sidebar.

use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::state::dashboard::{NO_TRANSACTIONS, format_currency, recent_transactions};

#[component]
pub fn RecentTransactions(
    transactions: Vec<Transaction>,
    /// Extra class on the wrapping section.
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let rows = recent_transactions(&transactions).to_vec();

    view! {
        <section class=format!("recent-transactions {class}")>
            <h2 class="header-2">"Recent transactions"</h2>
            {if rows.is_empty() {
                view! { <p class="recent-transactions__empty">{NO_TRANSACTIONS}</p> }.into_any()
            } else {
                view! {
                    <ul class="recent-transactions__list">
                        {rows
                            .into_iter()
                            .map(|tx| {
                                view! {
                                    <li class="transaction-row">
                                        <span class="transaction-row__name">{tx.name}</span>
                                        <span class="transaction-row__date">{tx.date}</span>
                                        <span class="transaction-row__amount">{format_currency(tx.amount)}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
