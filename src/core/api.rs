//! Backend auth API client
//!
//! [`AuthApi`] is the seam between the submit flow and the network.
//! [`HttpAuthApi`] builds an [`ApiRequest`] for each call and sends it with
//! `gloo-net`; it is only driven from the browser.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use web_sys::RequestCredentials;

use super::config::Config;
use super::validation::{LoginCredentials, RegistrationInput};

/// Creates a session (login)
pub const SESSIONS_PATH: &str = "/api/sessions";
/// Creates a user (registration)
pub const USERS_PATH: &str = "/api/users";

/// Request failure surfaced to the user as a single message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed with status code {status}")]
    Http { status: u16 },

    #[error("Network Error")]
    Network(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Encode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// A JSON POST, fully described before anything touches the network
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    /// Fetch credentials mode; `None` keeps the browser default
    pub credentials: Option<RequestCredentials>,
    /// Serialized JSON body
    pub body: String,
}

impl ApiRequest {
    fn post_json<B: Serialize>(
        config: &Config,
        path: &str,
        body: &B,
        credentials: Option<RequestCredentials>,
    ) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            url: config.api_url(path),
            credentials,
            body,
        })
    }

    /// Login: cookies are included so the server can set the session
    pub fn create_session(config: &Config, credentials: &LoginCredentials) -> Result<Self, ApiError> {
        Self::post_json(
            config,
            SESSIONS_PATH,
            credentials,
            Some(RequestCredentials::Include),
        )
    }

    /// Registration: sent without the credentials flag
    pub fn create_user(config: &Config, input: &RegistrationInput) -> Result<Self, ApiError> {
        Self::post_json(config, USERS_PATH, input, None)
    }

    async fn send(self) -> Result<(), ApiError> {
        let mut builder = Request::post(&self.url).header("Content-Type", "application/json");
        if let Some(credentials) = self.credentials {
            builder = builder.credentials(credentials);
        }
        let request = builder.body(self.body)?;

        check_status(request.send().await?)
    }
}

/// Auth endpoints the forms submit to
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// POST credentials to the sessions endpoint, with cookies
    async fn create_session(&self, credentials: &LoginCredentials) -> Result<(), ApiError>;

    /// POST a new user to the users endpoint
    async fn create_user(&self, input: &RegistrationInput) -> Result<(), ApiError>;
}

/// [`AuthApi`] backed by the browser's fetch
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    config: Config,
}

impl HttpAuthApi {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(Config::load())
    }
}

impl AuthApi for HttpAuthApi {
    async fn create_session(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        ApiRequest::create_session(&self.config, credentials)?
            .send()
            .await
    }

    async fn create_user(&self, input: &RegistrationInput) -> Result<(), ApiError> {
        ApiRequest::create_user(&self.config, input)?.send().await
    }
}

/// Any 2xx is success; the body is ignored either way
fn check_status(response: Response) -> Result<(), ApiError> {
    status_result(response.status())
}

fn status_result(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Http { status })
    }
}
