//! Login form component
//!
//! Collects email and password, validates both are present, creates a session
//! and navigates home.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::{
    FieldErrors, HttpAuthApi, LoginCredentials, REGISTER_ROUTE, SubmitOutcome, fields,
    submit_login,
};
use crate::ui::common::{ErrorMessage, FormField, SubmitButton};

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let navigate = use_navigate();
    let api = HttpAuthApi::default();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let field_errors = RwSignal::new(FieldErrors::new());
    let login_error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let credentials = move || LoginCredentials {
        email: email.get_untracked(),
        password: password.get_untracked(),
    };

    // After the first submit, every edit re-runs the schema
    let revalidate = Callback::new(move |_: ()| {
        if submitted.get_untracked() {
            field_errors.set(credentials().validate().err().unwrap_or_default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if pending.get_untracked() {
            return;
        }

        submitted.set(true);
        login_error.set(None);
        pending.set(true);

        let input = credentials();
        let api = api.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            let outcome = submit_login(&api, &input).await;
            pending.set(false);

            match outcome {
                SubmitOutcome::Rejected(errors) => field_errors.set(errors),
                SubmitOutcome::Redirect(route) => navigate(route, Default::default()),
                SubmitOutcome::Failed(message) => {
                    field_errors.set(FieldErrors::new());
                    login_error.set(Some(message));
                }
            }
        });
    };

    let field_error =
        move |field: &'static str| Signal::derive(move || field_errors.with(|e| e.message(field)));

    view! {
        <form on:submit=on_submit class="auth-form" novalidate=true>
            <h2 class="form-title">"Sign In"</h2>

            <ErrorMessage error=login_error />

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
                autocomplete="current-password"
                value=password
                error=field_error(fields::PASSWORD)
                on_change=revalidate
            />

            <SubmitButton pending=pending text="Submit" pending_text="Signing in..." />

            <div class="form-switch">
                "Don't have an account? "
                <A href=REGISTER_ROUTE attr:class="link">
                    "Sign up"
                </A>
            </div>
        </form>
    }
}
