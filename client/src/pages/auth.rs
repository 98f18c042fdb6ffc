//! Combined sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/:mode`. The route segment picks the form mode; anything other
//! than `sign-in` or `sign-up` renders the not-found notice. Each mount gets a
//! fresh `AuthFormController`, and the view re-renders from the snapshot the
//! controller publishes after every change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::auth_input::AuthInput;
use crate::components::link_account::LinkAccount;
use crate::net::identity::{AuthError, HttpIdentityBackend};
use crate::pages::auth_controller::AuthFormController;
use crate::state::auth_form::AuthForm;
use crate::state::fields::FormMode;
use crate::util::validation::ConfigError;

/// Resolve the `mode` route segment.
pub(crate) fn mode_from_param(param: Option<&str>) -> Result<FormMode, ConfigError> {
    param.unwrap_or_default().parse()
}

/// Route entry: maps the path segment to a mode and mounts [`AuthPage`].
#[component]
pub fn AuthRoute() -> impl IntoView {
    let params = use_params_map();

    move || match params.with(|p| mode_from_param(p.get_str("mode"))) {
        Ok(mode) => view! { <AuthPage mode=mode/> }.into_any(),
        Err(e) => {
            log::debug!("auth route: {e}");
            "Page not found.".into_any()
        }
    }
}

/// Auth form for one mode.
#[component]
pub fn AuthPage(mode: FormMode) -> impl IntoView {
    let form = RwSignal::new(AuthForm::new(mode));
    let navigate = use_navigate();

    let navigator = move |path: &str| navigate(path, NavigateOptions::default());
    let controller = AuthFormController::new(mode, Rc::new(HttpIdentityBackend), Rc::new(navigator))
        .with_observer(move |next: &AuthForm| form.set(next.clone()));
    let controller = StoredValue::new_local(Rc::new(controller));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            let outcome = controller.submit().await;
            log::debug!("auth form: submit -> {outcome:?}");
        });
    };

    let (link_label, link_path) = form.with_untracked(AuthForm::footer_link);
    let footer_prompt = form.with_untracked(AuthForm::footer_prompt);

    let notice = move || form.with(|f| f.error().map(AuthError::notice));

    view! {
        <section class="auth-form">
            <header class="auth-form__header">
                <a href="/" class="auth-form__logo">
                    <img src="/icons/logo.svg" width="34" height="34" alt="FinVault logo"/>
                    <span class="auth-form__brand">"FinVault"</span>
                </a>
                <div class="auth-form__titles">
                    <h1 class="auth-form__heading">{move || form.with(AuthForm::heading)}</h1>
                    <p class="auth-form__subheading">{move || form.with(AuthForm::subheading)}</p>
                </div>
            </header>

            <Show
                when=move || form.with(AuthForm::shows_inputs)
                fallback=move || form.with(|f| f.linked_user().cloned()).map(|user| view! { <LinkAccount user=user/> })
            >
                <form class="auth-form__form" on:submit=on_submit novalidate=true>
                    {mode
                        .fields()
                        .iter()
                        .copied()
                        .map(|field| {
                            let value = Signal::derive(move || form.with(|f| f.value(field).to_owned()));
                            let error = Signal::derive(move || {
                                form.with(|f| f.field_error(field).map(ToString::to_string))
                            });
                            let disabled = Signal::derive(move || form.with(AuthForm::is_submitting));
                            let on_input = Callback::new(move |v: String| controller.with_value(|c| c.edit(field, v)));
                            view! { <AuthInput field=field value=value error=error disabled=disabled on_input=on_input/> }
                        })
                        .collect_view()}

                    <Show when=move || notice().is_some()>
                        <p class="auth-form__notice" role="alert">{move || notice().unwrap_or_default()}</p>
                    </Show>

                    <button type="submit" class="form-btn" disabled=move || form.with(AuthForm::is_submitting)>
                        {move || form.with(AuthForm::submit_label)}
                    </button>
                </form>

                <footer class="auth-form__footer">
                    <p class="auth-form__prompt">{footer_prompt}</p>
                    <a class="form-link" href=link_path>{link_label}</a>
                </footer>
            </Show>
        </section>
    }
}
