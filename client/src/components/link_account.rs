//! Bank-link step shown in place of the sign-up inputs.

use leptos::prelude::*;

use crate::net::identity::GENERIC_NOTICE;
use crate::net::types::SessionUserRef;
use crate::state::link::LinkStatus;

/// "Connect bank" affordance for a freshly created account.
///
/// Requests a link token from the host; the linking widget that consumes
/// the token lives outside this app.
#[component]
pub fn LinkAccount(user: SessionUserRef) -> impl IntoView {
    let status = RwSignal::new(LinkStatus::default());
    let user = StoredValue::new(user);

    let on_connect = move |_| {
        if !status.try_update(LinkStatus::begin_request).unwrap_or(false) {
            return;
        }
        let user = user.get_value();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_link_token(&user).await;
            if let Err(e) = &result {
                log::warn!("bank link: token request for {} failed: {e}", user.user_id);
            }
            status.update(|s| s.finish(result));
        });
    };

    let busy = move || status.with(|s| matches!(s, LinkStatus::Requesting | LinkStatus::Ready(_)));

    view! {
        <div class="link-account">
            <button class="plaidlink-primary" on:click=on_connect disabled=busy>
                {move || status.with(LinkStatus::button_label)}
            </button>
            <Show when=move || status.with(|s| matches!(s, LinkStatus::Failed(_)))>
                <p class="form-message">{GENERIC_NOTICE}</p>
            </Show>
        </div>
    }
}
