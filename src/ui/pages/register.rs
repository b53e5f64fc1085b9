//! Register page component

use leptos::prelude::*;
use leptos_meta::Title;

use super::AuthLayout;
use crate::ui::auth::RegisterForm;

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Title text="Create Account"/>
        <AuthLayout>
            <RegisterForm />
        </AuthLayout>
    }
}
