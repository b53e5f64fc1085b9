//! Authentication forms
//!
//! Login and registration forms. Both validate on the client and post to the
//! backend configured by `SERVER_ENDPOINT`.

mod login_form;
mod register_form;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
