pub mod alert;
pub mod auth;

pub use alert::{AlertEntry, AlertFeed, ThreatAlert};
pub use auth::{Credentials, StatusResponse};
