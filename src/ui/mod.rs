pub mod auth;
pub mod common;
pub mod icon;
pub mod pages;

pub use auth::{LoginForm, RegisterForm};
pub use icon::{Icon, icons};
pub use pages::{HomePage, LoginPage, NotFoundPage, RegisterPage};
