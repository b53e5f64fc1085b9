//! Submit flow shared by the auth forms
//!
//! Validates the input against its schema, sends it through an [`AuthApi`],
//! and reports what the form should do next. Nothing here touches the DOM or
//! the router, so the flow runs the same under a mock API.

use leptos::logging::{log, warn};

use super::api::AuthApi;
use super::validation::{FieldErrors, LoginCredentials, RegistrationInput};

/// Home route, target after a successful login
pub const HOME_ROUTE: &str = "/";
/// Login page route, target after a successful registration
pub const LOGIN_ROUTE: &str = "/auth/login";
/// Registration page route
pub const REGISTER_ROUTE: &str = "/auth/register";

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input failed validation; no request was sent
    Rejected(FieldErrors),
    /// Request succeeded; navigate to the route
    Redirect(&'static str),
    /// Request failed with this message
    Failed(String),
}

impl SubmitOutcome {
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Redirect(route) => Some(*route),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitOutcome::Rejected(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Validate and send login credentials
pub async fn submit_login<A: AuthApi>(api: &A, credentials: &LoginCredentials) -> SubmitOutcome {
    if let Err(errors) = credentials.validate() {
        return SubmitOutcome::Rejected(errors);
    }

    match api.create_session(credentials).await {
        Ok(()) => {
            log!("Session created");
            SubmitOutcome::Redirect(HOME_ROUTE)
        }
        Err(e) => {
            warn!("Login failed: {:?}", e);
            SubmitOutcome::Failed(e.to_string())
        }
    }
}

/// Validate and send a registration
pub async fn submit_registration<A: AuthApi>(
    api: &A,
    input: &RegistrationInput,
) -> SubmitOutcome {
    if let Err(errors) = input.validate() {
        return SubmitOutcome::Rejected(errors);
    }

    match api.create_user(input).await {
        Ok(()) => {
            log!("User registered");
            SubmitOutcome::Redirect(LOGIN_ROUTE)
        }
        Err(e) => {
            warn!("Registration failed: {:?}", e);
            SubmitOutcome::Failed(e.to_string())
        }
    }
}
