use super::client::{ApiClient, ApiError};
use crate::auth::AuthBackend;
use crate::models::{Credentials, StatusResponse};

pub const LOGIN_PATH: &str = "/login_user";
pub const REGISTER_PATH: &str = "/register_user";

impl AuthBackend for ApiClient {
    /// Check credentials against the user table
    async fn login(&self, credentials: &Credentials) -> Result<StatusResponse, ApiError> {
        self.post(LOGIN_PATH, credentials).await
    }

    /// Create a new account; the backend answers a non-success status for taken names
    async fn register(&self, credentials: &Credentials) -> Result<StatusResponse, ApiError> {
        self.post(REGISTER_PATH, credentials).await
    }
}
