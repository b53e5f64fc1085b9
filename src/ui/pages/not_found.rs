//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{HOME_ROUTE, LOGIN_ROUTE};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="center-page">
            <Icon name=icons::ALERT_CIRCLE class="icon-lg" />

            <h1 class="page-title">"404"</h1>
            <h2 class="form-title">"Page Not Found"</h2>
            <p class="page-lead">"The page you're looking for doesn't exist or has been moved."</p>

            <div class="page-actions">
                <A href=HOME_ROUTE attr:class="btn-base btn-primary">"Go Home"</A>
                <A href=LOGIN_ROUTE attr:class="btn-base btn-secondary">"Sign In"</A>
            </div>
        </div>
    }
}
