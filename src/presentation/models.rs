//! API request/response models (DTOs)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::media::MediaItem;
use crate::domain::Project;

/// Success envelope for the project listing surface
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectsResponse {
    pub success: bool,
    pub data: Vec<Project>,
}

/// Success envelope for a single project
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub success: bool,
    pub data: Project,
}

/// Failure envelope shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// Stable machine-readable error code
    pub error: String,
    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Contact form submission body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Contact form acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Gallery listing envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MediaResponse {
    pub success: bool,
    pub data: Vec<MediaItem>,
}

/// Media listing query parameters
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct MediaQuery {
    /// Maximum number of items to return (1-50, default 18)
    pub limit: Option<u32>,
}

/// Project listing query parameters
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ProjectsQuery {
    /// GitHub username to list projects for; defaults to the configured owner
    pub username: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
