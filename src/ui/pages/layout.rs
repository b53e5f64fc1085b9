//! Shared chrome for the auth pages: header with home link, centered card, footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::HOME_ROUTE;

#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <header class="auth-header">
                <A href=HOME_ROUTE attr:class="auth-brand">"Auth Forms"</A>
            </header>

            <main class="auth-main">
                <div class="auth-card">{children()}</div>
            </main>

            <footer class="auth-footer">
                <p>"Sessions are managed by the server."</p>
            </footer>
        </div>
    }
}
