//! Application layer error types

use crate::infrastructure::api_clients::drive::DriveError;
use crate::infrastructure::api_clients::email::EmailError;
use crate::infrastructure::api_clients::github::GitHubError;
use thiserror::Error;

/// Errors surfaced by application use cases
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Rate limit exceeded, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Service misconfigured: {message}")]
    Configuration { message: String },

    #[error("GitHub request failed: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Email delivery failed: {0}")]
    Email(#[from] EmailError),

    #[error("Media storage request failed: {0}")]
    Media(#[from] DriveError),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApplicationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}
