//! In-memory cache implementation using moka

use crate::application::errors::ApplicationError;
use moka::future::Cache;
use std::time::Duration;

/// In-memory cache for transformed project lists and other derived data
pub struct MemoryCache {
    cache: Cache<String, Vec<u8>>,
}

impl MemoryCache {
    /// Create a new in-memory cache with specified capacity and TTL
    pub fn new(max_entries: u64, ttl_seconds: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build();

        Self { cache }
    }

    /// Get an entry from the cache
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>, ApplicationError>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.cache.get(key).await {
            Some(data) => serde_json::from_slice(&data)
                .map(Some)
                .map_err(ApplicationError::Json),
            None => Ok(None),
        }
    }

    /// Set an entry in the cache
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), ApplicationError>
    where
        T: serde::Serialize,
    {
        let serialized = serde_json::to_vec(value).map_err(ApplicationError::Json)?;
        self.cache.insert(key.to_string(), serialized).await;
        Ok(())
    }

}
