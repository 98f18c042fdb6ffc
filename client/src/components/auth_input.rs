//! Labeled auth form input with its inline validation message.

use leptos::prelude::*;

use crate::state::fields::Field;

/// One field of the auth form.
///
/// The input is fully controlled: `value` comes from the form state and every
/// keystroke is reported through `on_input`.
#[component]
pub fn AuthInput(
    field: Field,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = format!("auth-{}", field.name());

    view! {
        <div class="form-item">
            <label class="form-label" for=id.clone()>
                {field.label()}
            </label>
            <input
                id=id
                class="input-class"
                class:input-class--invalid=move || error.with(Option::is_some)
                name=field.name()
                type=field.input_type()
                placeholder=field.placeholder()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.with(Option::is_some)>
                <p class="form-message">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
