//! Media gallery use cases

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::errors::ApplicationError;
use crate::infrastructure::api_clients::drive::{DriveMedia, MediaStore};

/// Bounds on the media listing size
pub const MIN_MEDIA_LIMIT: u32 = 1;
pub const MAX_MEDIA_LIMIT: u32 = 50;
pub const DEFAULT_MEDIA_LIMIT: u32 = 18;

/// One gallery entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaItem {
    /// Synthesized identifier, stable per source file
    pub id: String,
    /// Filename without its extension
    pub title: String,
    /// Always empty; gallery entries carry no prose
    pub description: String,
    /// Proxied image path served by this API
    pub image_path: String,
    /// Creation timestamp as reported by the drive, listing time when absent
    pub date: DateTime<Utc>,
    /// Gallery entries are never featured
    pub featured: bool,
}

/// Clamp a requested listing size into the supported range
pub fn clamp_limit(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_MEDIA_LIMIT)
        .clamp(MIN_MEDIA_LIMIT, MAX_MEDIA_LIMIT)
}

fn title_from_filename(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => match name.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
            // Dotfiles strip to nothing, so they get the generic title too
            Some(("", _ext)) => "Photo".to_string(),
            _ => name.to_string(),
        },
        _ => "Photo".to_string(),
    }
}

/// Lists gallery images from the configured drive folder
pub struct ListMediaUseCase {
    store: Arc<dyn MediaStore>,
}

impl ListMediaUseCase {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, limit: Option<u32>) -> Result<Vec<MediaItem>, ApplicationError> {
        let limit = clamp_limit(limit);
        let files = self.store.list_images(limit).await?;

        let items: Vec<MediaItem> = files
            .into_iter()
            .map(|file| MediaItem {
                id: format!("drive-{}", file.id),
                title: title_from_filename(file.name.as_deref()),
                description: String::new(),
                image_path: format!("/api/v1/media/image/{}", file.id),
                date: file.created_time.unwrap_or_else(Utc::now),
                featured: false,
            })
            .collect();

        info!(count = items.len(), limit, "Listed gallery media");
        Ok(items)
    }
}

/// Proxies one gallery image's bytes from the drive
pub struct FetchMediaImageUseCase {
    store: Arc<dyn MediaStore>,
}

impl FetchMediaImageUseCase {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, file_id: &str) -> Result<DriveMedia, ApplicationError> {
        Ok(self.store.fetch_image(file_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api_clients::drive::{DriveError, DriveFile};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn test_limit_clamping() {
        assert_eq!(clamp_limit(None), 18);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(7)), 7);
        assert_eq!(clamp_limit(Some(200)), 50);
    }

    #[test]
    fn test_title_derivation() {
        assert_eq!(title_from_filename(Some("sunset.jpg")), "sunset");
        assert_eq!(title_from_filename(Some("archive.tar.gz")), "archive.tar");
        assert_eq!(title_from_filename(Some("no-extension")), "no-extension");
        assert_eq!(title_from_filename(Some(".hidden")), "Photo");
        assert_eq!(title_from_filename(Some("")), "Photo");
        assert_eq!(title_from_filename(None), "Photo");
    }

    struct StaticStore {
        files: Vec<DriveFile>,
        requested_limit: Mutex<Option<u32>>,
    }

    #[async_trait]
    impl MediaStore for StaticStore {
        async fn list_images(&self, limit: u32) -> Result<Vec<DriveFile>, DriveError> {
            *self.requested_limit.lock().unwrap() = Some(limit);
            Ok(self.files.clone())
        }

        async fn fetch_image(&self, _file_id: &str) -> Result<DriveMedia, DriveError> {
            Ok(DriveMedia {
                content_type: "image/png".to_string(),
                bytes: bytes::Bytes::from_static(b"png"),
            })
        }
    }

    #[tokio::test]
    async fn test_listing_synthesizes_items() {
        let store = Arc::new(StaticStore {
            files: vec![DriveFile {
                id: "abc123".to_string(),
                name: Some("sunset.jpg".to_string()),
                created_time: Some("2024-03-01T00:00:00Z".parse().unwrap()),
            }],
            requested_limit: Mutex::new(None),
        });
        let use_case = ListMediaUseCase::new(store.clone());

        let items = use_case.execute(Some(500)).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "drive-abc123");
        assert_eq!(items[0].title, "sunset");
        assert_eq!(items[0].description, "");
        assert_eq!(items[0].image_path, "/api/v1/media/image/abc123");
        assert_eq!(items[0].date, "2024-03-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
        assert!(!items[0].featured);

        // Out-of-range request is clamped before reaching the store
        assert_eq!(*store.requested_limit.lock().unwrap(), Some(50));
    }

    #[tokio::test]
    async fn test_missing_created_time_falls_back_to_listing_time() {
        let store = Arc::new(StaticStore {
            files: vec![DriveFile {
                id: "f9".to_string(),
                name: None,
                created_time: None,
            }],
            requested_limit: Mutex::new(None),
        });
        let use_case = ListMediaUseCase::new(store);

        let before = Utc::now();
        let items = use_case.execute(None).await.unwrap();
        let after = Utc::now();

        assert_eq!(items[0].title, "Photo");
        assert!(items[0].date >= before && items[0].date <= after);

        // Every declared field serializes, even the constant ones
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["description"], "");
        assert_eq!(json["featured"], false);
        assert!(json["date"].is_string());
    }
}
