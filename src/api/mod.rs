pub mod alerts;
pub mod auth;
pub mod client;

pub use client::{ApiClient, ApiError};
