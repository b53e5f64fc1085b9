//! Core form logic: validation schemas, API client and the submit flow

pub mod api;
pub mod config;
mod submit;
#[cfg(all(test, feature = "ssr"))]
mod tests;
pub mod validation;

pub use api::{ApiError, ApiRequest, AuthApi, HttpAuthApi, SESSIONS_PATH, USERS_PATH};
pub use config::Config;
pub use submit::*;
pub use validation::{FieldErrors, LoginCredentials, RegistrationInput, Rule, Schema, fields};
