//! Login page component
//!
//! A standalone page hosting the login form. The form navigates home on success.

use leptos::prelude::*;
use leptos_meta::Title;

use super::AuthLayout;
use crate::ui::auth::LoginForm;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Sign In"/>
        <AuthLayout>
            <LoginForm />
        </AuthLayout>
    }
}
