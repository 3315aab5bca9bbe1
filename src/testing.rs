//! Fakes for the backend and browser seams

use std::cell::{Cell, RefCell};

use crate::api::ApiError;
use crate::auth::AuthBackend;
use crate::browser::Browser;
use crate::models::{Credentials, StatusResponse};

/// Backend that answers every request with the same result
pub struct FakeBackend {
    reply: Result<StatusResponse, ApiError>,
    calls: Cell<usize>,
    last: RefCell<Option<(&'static str, Credentials)>>,
}

impl FakeBackend {
    pub fn replying(response: StatusResponse) -> Self {
        Self::with_reply(Ok(response))
    }

    pub fn failing(error: ApiError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<StatusResponse, ApiError>) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            last: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_endpoint(&self) -> Option<&'static str> {
        self.last.borrow().as_ref().map(|(endpoint, _)| *endpoint)
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        self.last.borrow().as_ref().map(|(_, creds)| creds.clone())
    }

    fn record(
        &self,
        endpoint: &'static str,
        credentials: &Credentials,
    ) -> Result<StatusResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some((endpoint, credentials.clone()));
        self.reply.clone()
    }
}

impl AuthBackend for FakeBackend {
    async fn login(&self, credentials: &Credentials) -> Result<StatusResponse, ApiError> {
        self.record("login", credentials)
    }

    async fn register(&self, credentials: &Credentials) -> Result<StatusResponse, ApiError> {
        self.record("register", credentials)
    }
}

/// Browser that records alerts and navigations in call order
#[derive(Default)]
pub struct RecordingBrowser {
    events: RefCell<Vec<String>>,
}

impl RecordingBrowser {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.with_prefix("alert:")
    }

    pub fn navigations(&self) -> Vec<String> {
        self.with_prefix("navigate:")
    }

    fn with_prefix(&self, prefix: &str) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| e.strip_prefix(prefix).map(str::to_string))
            .collect()
    }
}

impl Browser for RecordingBrowser {
    fn alert(&self, message: &str) {
        self.events.borrow_mut().push(format!("alert:{message}"));
    }

    fn navigate(&self, path: &str) {
        self.events.borrow_mut().push(format!("navigate:{path}"));
    }
}
