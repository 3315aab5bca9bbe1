use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value the backend returns for an accepted login or registration
pub const STATUS_SUCCESS: &str = "success";

/// Username and password as sent to `/login_user` and `/register_user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw form input.
    ///
    /// Both values are trimmed; returns `None` if either ends up empty.
    pub fn from_input(username: &str, password: &str) -> Option<Self> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return None;
        }

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Reply body of the auth endpoints; every field except `status` is ignored.
///
/// Any JSON value parses: a non-object body or a `status` of another type is
/// simply not a success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct StatusResponse {
    pub status: Option<Value>,
}

impl From<Value> for StatusResponse {
    fn from(body: Value) -> Self {
        Self {
            status: body.get("status").cloned(),
        }
    }
}

impl StatusResponse {
    #[cfg(test)]
    pub fn success() -> Self {
        Self::with_status(Value::from(STATUS_SUCCESS))
    }

    #[cfg(test)]
    pub fn with_status(status: impl Into<Value>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }

    /// Exact match against the string `"success"`
    pub fn is_success(&self) -> bool {
        matches!(&self.status, Some(Value::String(status)) if status == STATUS_SUCCESS)
    }
}
