use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons without .svg)
    name: &'static str,
    /// CSS classes
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const LOCK: &str = "lock";
    pub const USER_PLUS: &str = "user-plus";
}
