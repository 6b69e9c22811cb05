//! Cloud drive API client implementation (media gallery source)

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use std::time::Duration;

use crate::config::DriveConfig;

/// One image file in the gallery folder
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct FileListPayload {
    #[serde(default)]
    files: Vec<DriveFile>,
}

/// Raw image bytes with their reported content type
#[derive(Debug, Clone)]
pub struct DriveMedia {
    pub content_type: String,
    pub bytes: Bytes,
}

/// Error talking to the drive API
#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    #[error("Drive request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Drive API returned {status}")]
    Status { status: StatusCode },

    #[error("Failed to decode drive response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of gallery images
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// List up to `limit` image files in the gallery folder, newest first
    async fn list_images(&self, limit: u32) -> Result<Vec<DriveFile>, DriveError>;

    /// Download one file's bytes
    async fn fetch_image(&self, file_id: &str) -> Result<DriveMedia, DriveError>;
}

/// Client for a Google-Drive-style files API
pub struct DriveClient {
    client: Client,
    base_url: String,
    token: String,
    folder_id: String,
}

impl DriveClient {
    /// Create a new client. Token and folder id are required; callers gate
    /// on configuration before constructing one.
    pub fn new(config: &DriveConfig, token: String, folder_id: String) -> Result<Self, DriveError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("folio-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
            folder_id,
        })
    }
}

#[async_trait]
impl MediaStore for DriveClient {
    async fn list_images(&self, limit: u32) -> Result<Vec<DriveFile>, DriveError> {
        let url = format!("{}/drive/v3/files", self.base_url);
        let query = format!(
            "'{}' in parents and mimeType contains 'image/' and trashed = false",
            self.folder_id
        );

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(&[
                ("q", query.as_str()),
                ("fields", "files(id,name,createdTime)"),
                ("orderBy", "createdTime desc"),
                ("pageSize", &limit.to_string()),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DriveError::Status { status });
        }

        let body = response.text().await?;
        let payload: FileListPayload = serde_json::from_str(&body)?;
        Ok(payload.files)
    }

    async fn fetch_image(&self, file_id: &str) -> Result<DriveMedia, DriveError> {
        let url = format!("{}/drive/v3/files/{}", self.base_url, file_id);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("alt", "media")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DriveError::Status { status });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();
        let bytes = response.bytes().await?;

        Ok(DriveMedia {
            content_type,
            bytes,
        })
    }
}
