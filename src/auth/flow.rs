//! Login and registration submit handlers.
//!
//! Each handler validates the form input, makes at most one request and
//! returns what the page should do next as an [`Outcome`].

use super::session::SessionStore;
use crate::api::ApiError;
use crate::browser::Browser;
use crate::models::{Credentials, StatusResponse};
use crate::navigation::{navigate, NavTarget};

pub const LOGIN_EMPTY_FIELDS: &str = "Please enter username and password.";
pub const LOGIN_REJECTED: &str = "Invalid username or password.";
pub const REGISTER_EMPTY_FIELDS: &str = "Please fill all fields.";
pub const REGISTER_ACCEPTED: &str = "Account created successfully!";
pub const REGISTER_REJECTED: &str = "Username already exists.";
pub const SERVER_UNREACHABLE: &str = "Could not reach the server. Please try again.";

/// The backend endpoints a submit handler talks to
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<StatusResponse, ApiError>;
    async fn register(&self, credentials: &Credentials) -> Result<StatusResponse, ApiError>;
}

/// What a finished click does to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Alert(&'static str),
    Navigate(NavTarget),
    AlertThenNavigate(&'static str, NavTarget),
}

impl Outcome {
    pub fn apply(&self, browser: &impl Browser) {
        match self {
            Outcome::Alert(message) => browser.alert(message),
            Outcome::Navigate(target) => navigate(browser, *target),
            Outcome::AlertThenNavigate(message, target) => {
                browser.alert(message);
                navigate(browser, *target);
            }
        }
    }
}

/// Log in and start the session on success
pub async fn submit_login(
    backend: &impl AuthBackend,
    session: &impl SessionStore,
    username: &str,
    password: &str,
) -> Outcome {
    let Some(credentials) = Credentials::from_input(username, password) else {
        return Outcome::Alert(LOGIN_EMPTY_FIELDS);
    };

    log::info!("Logging in as {}", credentials.username);

    match backend.login(&credentials).await {
        Ok(response) if response.is_success() => {
            session.begin();
            Outcome::Navigate(NavTarget::Dashboard)
        }
        Ok(response) => {
            log::warn!("Login rejected with status {:?}", response.status);
            Outcome::Alert(LOGIN_REJECTED)
        }
        Err(e) => {
            log::error!("Login request failed: {}", e);
            Outcome::Alert(SERVER_UNREACHABLE)
        }
    }
}

/// Create an account, then send the user back to the login page
pub async fn submit_registration(
    backend: &impl AuthBackend,
    username: &str,
    password: &str,
) -> Outcome {
    let Some(credentials) = Credentials::from_input(username, password) else {
        return Outcome::Alert(REGISTER_EMPTY_FIELDS);
    };

    log::info!("Registering {}", credentials.username);

    match backend.register(&credentials).await {
        Ok(response) if response.is_success() => {
            Outcome::AlertThenNavigate(REGISTER_ACCEPTED, NavTarget::Home)
        }
        Ok(response) => {
            log::warn!("Registration rejected with status {:?}", response.status);
            Outcome::Alert(REGISTER_REJECTED)
        }
        Err(e) => {
            log::error!("Registration request failed: {}", e);
            Outcome::Alert(SERVER_UNREACHABLE)
        }
    }
}

/// End the session and return to the login page
pub fn logout(session: &impl SessionStore) -> Outcome {
    session.end();
    log::info!("Logged out");
    Outcome::Navigate(NavTarget::Home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemorySessionStore;
    use crate::testing::{FakeBackend, RecordingBrowser};
    use futures::executor::block_on;

    const BLANK_INPUTS: [(&str, &str); 5] = [
        ("", ""),
        ("alice", ""),
        ("", "secret"),
        ("   ", "secret"),
        ("alice", "\t \n"),
    ];

    #[test]
    fn test_login_blank_fields_never_call_backend() {
        for (username, password) in BLANK_INPUTS {
            let backend = FakeBackend::replying(StatusResponse::success());
            let session = MemorySessionStore::default();

            let outcome = block_on(submit_login(&backend, &session, username, password));

            assert_eq!(outcome, Outcome::Alert(LOGIN_EMPTY_FIELDS));
            assert_eq!(backend.calls(), 0);
            assert_eq!(session.writes(), 0);
        }
    }

    #[test]
    fn test_login_success_starts_session_and_opens_dashboard() {
        let backend = FakeBackend::replying(StatusResponse::success());
        let session = MemorySessionStore::default();

        let outcome = block_on(submit_login(&backend, &session, " alice ", "secret "));

        assert_eq!(outcome, Outcome::Navigate(NavTarget::Dashboard));
        assert_eq!(session.value().as_deref(), Some("true"));
        assert_eq!(
            backend.last_credentials(),
            Some(Credentials {
                username: "alice".into(),
                password: "secret".into(),
            })
        );
        assert_eq!(backend.last_endpoint(), Some("login"));

        let browser = RecordingBrowser::default();
        outcome.apply(&browser);
        assert_eq!(browser.navigations(), vec!["/dashboard".to_string()]);
        assert!(browser.alerts().is_empty());
    }

    #[test]
    fn test_login_rejection_leaves_session_and_page_alone() {
        for status in ["failure", "fail", "SUCCESS"] {
            let backend = FakeBackend::replying(StatusResponse::with_status(status));
            let session = MemorySessionStore::default();

            let outcome = block_on(submit_login(&backend, &session, "alice", "wrong"));

            assert_eq!(outcome, Outcome::Alert(LOGIN_REJECTED));
            assert_eq!(session.writes(), 0);

            let browser = RecordingBrowser::default();
            outcome.apply(&browser);
            assert_eq!(
                browser.alerts(),
                vec!["Invalid username or password.".to_string()]
            );
            assert!(browser.navigations().is_empty());
        }
    }

    #[test]
    fn test_login_missing_status_is_rejection() {
        let backend = FakeBackend::replying(StatusResponse::default());
        let session = MemorySessionStore::default();

        let outcome = block_on(submit_login(&backend, &session, "alice", "secret"));

        assert_eq!(outcome, Outcome::Alert(LOGIN_REJECTED));
        assert!(!session.is_active());
    }

    #[test]
    fn test_login_non_string_status_is_rejection() {
        for body in [r#"{"status":false}"#, r#"{"status":1}"#, "[]"] {
            let reply: StatusResponse = serde_json::from_str(body).unwrap();
            let backend = FakeBackend::replying(reply);
            let session = MemorySessionStore::default();

            let outcome = block_on(submit_login(&backend, &session, "alice", "secret"));

            assert_eq!(outcome, Outcome::Alert(LOGIN_REJECTED), "{body}");
            assert_eq!(session.writes(), 0);
        }
    }

    #[test]
    fn test_login_transport_failure_alerts_without_session() {
        let backend = FakeBackend::failing(ApiError::Network("connection refused".into()));
        let session = MemorySessionStore::default();

        let outcome = block_on(submit_login(&backend, &session, "alice", "secret"));

        assert_eq!(outcome, Outcome::Alert(SERVER_UNREACHABLE));
        assert_eq!(session.writes(), 0);
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_registration_blank_fields_never_call_backend() {
        for (username, password) in BLANK_INPUTS {
            let backend = FakeBackend::replying(StatusResponse::success());

            let outcome = block_on(submit_registration(&backend, username, password));

            assert_eq!(outcome, Outcome::Alert(REGISTER_EMPTY_FIELDS));
            assert_eq!(backend.calls(), 0);
        }
    }

    #[test]
    fn test_registration_success_alerts_then_goes_home() {
        let backend = FakeBackend::replying(StatusResponse::success());

        let outcome = block_on(submit_registration(&backend, "bob", "hunter2"));

        assert_eq!(
            outcome,
            Outcome::AlertThenNavigate(REGISTER_ACCEPTED, NavTarget::Home)
        );
        assert_eq!(backend.last_endpoint(), Some("register"));

        let browser = RecordingBrowser::default();
        outcome.apply(&browser);
        assert_eq!(browser.events(), vec!["alert:Account created successfully!", "navigate:/"]);
    }

    #[test]
    fn test_registration_rejection_stays_on_page() {
        let backend = FakeBackend::replying(StatusResponse::with_status("exists"));

        let outcome = block_on(submit_registration(&backend, "bob", "hunter2"));

        let browser = RecordingBrowser::default();
        outcome.apply(&browser);
        assert_eq!(browser.alerts(), vec!["Username already exists.".to_string()]);
        assert!(browser.navigations().is_empty());
    }

    #[test]
    fn test_registration_non_string_status_is_rejection() {
        let reply: StatusResponse = serde_json::from_str(r#"{"status":false}"#).unwrap();
        let backend = FakeBackend::replying(reply);

        let outcome = block_on(submit_registration(&backend, "bob", "hunter2"));

        assert_eq!(outcome, Outcome::Alert(REGISTER_REJECTED));
    }

    #[test]
    fn test_registration_http_error_is_not_reported_as_taken_name() {
        let backend = FakeBackend::failing(ApiError::Http {
            status: 500,
            message: "Internal Server Error".into(),
        });

        let outcome = block_on(submit_registration(&backend, "bob", "hunter2"));

        assert_eq!(outcome, Outcome::Alert(SERVER_UNREACHABLE));
    }

    #[test]
    fn test_logout_ends_session_and_goes_home() {
        let session = MemorySessionStore::default();
        session.begin();

        let outcome = logout(&session);

        assert!(!session.is_active());
        assert_eq!(outcome, Outcome::Navigate(NavTarget::Home));
    }
}
