//! Greeting header for the dashboard.

use leptos::prelude::*;

#[component]
pub fn HeaderBox(
    title: &'static str,
    subtext: &'static str,
    /// Highlighted name appended to the title.
    #[prop(optional, into)]
    user: Option<String>,
) -> impl IntoView {
    view! {
        <div class="header-box">
            <h1 class="header-box-title">
                {title}
                {user.map(|name| view! { <span class="text-bankGradient">" " {name}</span> })}
            </h1>
            <p class="header-box-subtext">{subtext}</p>
        </div>
    }
}
