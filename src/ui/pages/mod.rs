//! Application pages module
//!
//! This module contains the page components routed by the app:
//! - Home page
//! - Login page
//! - Register page
//! - Not found page

mod home;
mod layout;
mod login;
mod not_found;
mod register;

pub use home::HomePage;
use layout::AuthLayout;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
