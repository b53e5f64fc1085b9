#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::core::{
        ApiError, AuthApi, HOME_ROUTE, LOGIN_ROUTE, LoginCredentials, RegistrationInput,
        SubmitOutcome, fields, submit_login, submit_registration,
    };

    /// Records every request and answers with a fixed result
    struct MockAuthApi {
        result: Result<(), ApiError>,
        sessions: RefCell<Vec<LoginCredentials>>,
        users: RefCell<Vec<RegistrationInput>>,
    }

    impl MockAuthApi {
        fn ok() -> Self {
            Self::with_result(Ok(()))
        }

        fn failing(error: ApiError) -> Self {
            Self::with_result(Err(error))
        }

        fn with_result(result: Result<(), ApiError>) -> Self {
            Self {
                result,
                sessions: RefCell::new(Vec::new()),
                users: RefCell::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.sessions.borrow().len() + self.users.borrow().len()
        }
    }

    impl AuthApi for MockAuthApi {
        async fn create_session(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
            self.sessions.borrow_mut().push(credentials.clone());
            self.result.clone()
        }

        async fn create_user(&self, input: &RegistrationInput) -> Result<(), ApiError> {
            self.users.borrow_mut().push(input.clone());
            self.result.clone()
        }
    }

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn registration(password: &str, confirmation: &str) -> RegistrationInput {
        RegistrationInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    // ========================================================================
    // Login flow
    // ========================================================================

    #[tokio::test]
    async fn test_login_empty_fields_sends_nothing() {
        let api = MockAuthApi::ok();

        let outcome = submit_login(&api, &credentials("", "")).await;

        let errors = outcome.field_errors().expect("validation errors");
        assert!(errors.contains(fields::EMAIL));
        assert!(errors.contains(fields::PASSWORD));
        assert_eq!(outcome.redirect(), None);
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_login_empty_email_only() {
        let api = MockAuthApi::ok();

        let outcome = submit_login(&api, &credentials("", "secret")).await;

        let errors = outcome.field_errors().expect("validation errors");
        assert_eq!(errors.get(fields::EMAIL), Some("Email is required"));
        assert!(!errors.contains(fields::PASSWORD));
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_login_success_redirects_home() {
        let api = MockAuthApi::ok();

        let outcome = submit_login(&api, &credentials("user@example.com", "secret")).await;

        assert_eq!(outcome, SubmitOutcome::Redirect(HOME_ROUTE));
        assert_eq!(outcome.redirect(), Some("/"));
        let sent = api.sessions.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], credentials("user@example.com", "secret"));
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_message() {
        let api = MockAuthApi::failing(ApiError::Http { status: 401 });

        let outcome = submit_login(&api, &credentials("user@example.com", "wrong")).await;

        assert_eq!(
            outcome.error_message(),
            Some("Request failed with status code 401")
        );
        assert_eq!(outcome.redirect(), None);
        assert_eq!(api.request_count(), 1);
    }

    #[tokio::test]
    async fn test_login_network_failure() {
        let api = MockAuthApi::failing(ApiError::Network("connection refused".to_string()));

        let outcome = submit_login(&api, &credentials("user@example.com", "secret")).await;

        assert_eq!(outcome, SubmitOutcome::Failed("Network Error".to_string()));
    }

    // ========================================================================
    // Registration flow
    // ========================================================================

    #[tokio::test]
    async fn test_registration_short_password_sends_nothing() {
        let api = MockAuthApi::ok();

        let outcome = submit_registration(&api, &registration("abc", "abc")).await;

        let errors = outcome.field_errors().expect("validation errors");
        assert_eq!(
            errors.get(fields::PASSWORD),
            Some("Password too short - should be 6 chars minimum")
        );
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_registration_mismatch_sends_nothing() {
        let api = MockAuthApi::ok();

        let outcome = submit_registration(&api, &registration("abcdef", "abcdef1")).await;

        let errors = outcome.field_errors().expect("validation errors");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(fields::PASSWORD_CONFIRMATION),
            Some("Passwords do not match")
        );
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_registration_success_redirects_to_login() {
        let api = MockAuthApi::ok();

        let outcome = submit_registration(&api, &registration("abcdef", "abcdef")).await;

        assert_eq!(outcome, SubmitOutcome::Redirect(LOGIN_ROUTE));
        assert_eq!(outcome.redirect(), Some("/auth/login"));
        assert_eq!(api.users.borrow().len(), 1);
        assert!(api.sessions.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_registration_failure_surfaces_message() {
        let api = MockAuthApi::failing(ApiError::Http { status: 409 });

        let outcome = submit_registration(&api, &registration("abcdef", "abcdef")).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("Request failed with status code 409".to_string())
        );
        assert_eq!(outcome.redirect(), None);
        assert!(outcome.field_errors().is_none());
    }
}
