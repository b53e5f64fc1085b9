//! Home page component
//!
//! Landing target after login, with entry points into both auth forms.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::{LOGIN_ROUTE, REGISTER_ROUTE};
use crate::ui::icon::{Icon, icons};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <div class="center-page">
            <h1 class="page-title">"Welcome"</h1>
            <p class="page-lead">"Sign in to an existing account or create a new one."</p>

            <div class="page-actions">
                <A href=LOGIN_ROUTE attr:class="btn-base btn-primary icon-text-row">
                    <Icon name=icons::LOCK class="icon-text" />
                    "Sign In"
                </A>
                <A href=REGISTER_ROUTE attr:class="btn-base btn-secondary icon-text-row">
                    <Icon name=icons::USER_PLUS class="icon-text" />
                    "Create Account"
                </A>
            </div>
        </div>
    }
}
