use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input bound to a string signal, with an inline field error
#[component]
pub fn FormField(
    /// Input id, also used as the input name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value
    value: RwSignal<String>,
    /// Field error to display, if any
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called after every edit
    #[prop(optional, into)]
    on_change: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="form-element">
            <label for=id class="label">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class:input-invalid=move || error.get().is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(callback) = on_change.as_ref() {
                        callback.run(());
                    }
                }
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="field-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Form submit button that is disabled while a request is pending
#[component]
pub fn SubmitButton(
    /// Whether a request is in flight
    #[prop(into)]
    pending: Signal<bool>,
    /// Button text when idle
    text: &'static str,
    /// Button text while pending
    #[prop(default = "Submitting...")]
    pending_text: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn-base btn-primary btn-block"
            disabled=move || pending.get()
        >
            <Show
                when=move || pending.get()
                fallback=move || view! { <span>{text}</span> }
            >
                <span class="icon-text-row">
                    <Icon name=icons::LOADER class="icon-text spinner-icon" />
                    {pending_text}
                </span>
            </Show>
        </button>
    }
}
