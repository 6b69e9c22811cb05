//! Rate limit storage backends
//!
//! The limiter talks to storage through a trait so a shared backend (e.g.
//! a key-value cache) can replace the in-memory map under multi-instance
//! deployment without touching call sites.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Per-identifier submission counter for one fixed window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionWindow {
    /// Submissions counted in the current window
    pub count: u32,
    /// Start of the window (Unix timestamp in seconds)
    pub window_start: u64,
}

impl SubmissionWindow {
    /// Start a fresh window with one counted submission
    pub fn started_at(now: u64) -> Self {
        Self {
            count: 1,
            window_start: now,
        }
    }
}

/// Trait for rate limit storage backends
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Get the window state for an identifier
    async fn get(&self, key: &str) -> Option<SubmissionWindow>;

    /// Store the window state for an identifier
    async fn set(&self, key: &str, window: SubmissionWindow);

    /// Remove every entry whose window started before `cutoff`
    async fn sweep(&self, cutoff: u64);

    /// Number of tracked identifiers (diagnostics)
    async fn len(&self) -> usize;
}

/// In-memory storage backend for single-instance deployments
#[derive(Default)]
pub struct InMemoryRateLimitStore {
    entries: RwLock<HashMap<String, SubmissionWindow>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimitStore {
    async fn get(&self, key: &str) -> Option<SubmissionWindow> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, window: SubmissionWindow) {
        self.entries.write().await.insert(key.to_string(), window);
    }

    async fn sweep(&self, cutoff: u64) {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, window| window.window_start >= cutoff);
        let removed = before - entries.len();

        if removed > 0 {
            debug!(removed, retained = entries.len(), "Swept stale rate limit entries");
        }
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
