//! Register form component
//!
//! Collects name, email, password and confirmation, creates the user and sends
//! the visitor on to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::{
    FieldErrors, HttpAuthApi, LOGIN_ROUTE, RegistrationInput, SubmitOutcome, fields,
    submit_registration,
};
use crate::ui::common::{ErrorMessage, FormField, SubmitButton};

/// Register form component
#[component]
pub fn RegisterForm() -> impl IntoView {
    let navigate = use_navigate();
    let api = HttpAuthApi::default();

    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());

    let field_errors = RwSignal::new(FieldErrors::new());
    let register_error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let input = move || RegistrationInput {
        name: name.get_untracked(),
        email: email.get_untracked(),
        password: password.get_untracked(),
        password_confirmation: password_confirmation.get_untracked(),
    };

    let revalidate = Callback::new(move |_: ()| {
        if submitted.get_untracked() {
            field_errors.set(input().validate().err().unwrap_or_default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if pending.get_untracked() {
            return;
        }

        submitted.set(true);
        register_error.set(None);
        pending.set(true);

        let registration = input();
        let api = api.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            let outcome = submit_registration(&api, &registration).await;
            pending.set(false);

            match outcome {
                SubmitOutcome::Rejected(errors) => field_errors.set(errors),
                SubmitOutcome::Redirect(route) => navigate(route, Default::default()),
                SubmitOutcome::Failed(message) => {
                    field_errors.set(FieldErrors::new());
                    register_error.set(Some(message));
                }
            }
        });
    };

    let field_error =
        move |field: &'static str| Signal::derive(move || field_errors.with(|e| e.message(field)));

    view! {
        <form on:submit=on_submit class="auth-form" novalidate=true>
            <h2 class="form-title">"Create Account"</h2>

            <ErrorMessage error=register_error />

            <FormField
                id=fields::NAME
                label="Name"
                placeholder="Jane Doe"
                autocomplete="name"
                value=name
                error=field_error(fields::NAME)
                on_change=revalidate
            />

            <FormField
                id=fields::EMAIL
                label="Email"
                input_type="email"
                placeholder="Email"
                autocomplete="email"
                value=email
                error=field_error(fields::EMAIL)
                on_change=revalidate
            />

            <FormField
                id=fields::PASSWORD
                label="Password"
                input_type="password"
                placeholder="Password"
                autocomplete="new-password"
                value=password
                error=field_error(fields::PASSWORD)
                on_change=revalidate
            />

            <FormField
                id=fields::PASSWORD_CONFIRMATION
                label="Confirm Password"
                input_type="password"
                placeholder="Confirm Password"
                autocomplete="new-password"
                value=password_confirmation
                error=field_error(fields::PASSWORD_CONFIRMATION)
                on_change=revalidate
            />

            <SubmitButton pending=pending text="Submit" pending_text="Creating account..." />

            <div class="form-switch">
                "Already have an account? "
                <A href=LOGIN_ROUTE attr:class="link">
                    "Sign in"
                </A>
            </div>
        </form>
    }
}
