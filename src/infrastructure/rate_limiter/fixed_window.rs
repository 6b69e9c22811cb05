//! Fixed-window submission limiter
//!
//! Counts submissions per identifier inside a fixed window. The first
//! submission opens the window; once `max_submissions` is reached, further
//! attempts are rejected until the window elapses, at which point the next
//! attempt opens a fresh window.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use super::storage::{RateLimitStore, SubmissionWindow};

/// Outcome of a rate limit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionDecision {
    /// The submission is within the allowance
    Allowed {
        /// Submissions remaining in the current window after this one
        remaining: u32,
    },
    /// The allowance is exhausted for this window
    Rejected {
        /// Seconds until the window elapses and submissions resume
        retry_after_seconds: u64,
    },
}

/// Fixed-window rate limiter over a pluggable storage backend
pub struct SubmissionLimiter {
    store: Arc<dyn RateLimitStore>,
    max_submissions: u32,
    window_seconds: u64,
}

impl SubmissionLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, max_submissions: u32, window_seconds: u64) -> Self {
        Self {
            store,
            max_submissions,
            window_seconds,
        }
    }

    /// Record a submission attempt for `key` and decide whether it may proceed
    pub async fn check(&self, key: &str) -> SubmissionDecision {
        self.check_at(key, unix_now()).await
    }

    /// Like [`check`](Self::check) with an injected clock, for tests
    pub async fn check_at(&self, key: &str, now: u64) -> SubmissionDecision {
        match self.store.get(key).await {
            Some(window) if now < window.window_start + self.window_seconds => {
                if window.count >= self.max_submissions {
                    let retry_after_seconds = window.window_start + self.window_seconds - now;
                    warn!(key, count = window.count, "Submission rate limit exceeded");
                    return SubmissionDecision::Rejected {
                        retry_after_seconds,
                    };
                }

                let updated = SubmissionWindow {
                    count: window.count + 1,
                    window_start: window.window_start,
                };
                self.store.set(key, updated.clone()).await;
                SubmissionDecision::Allowed {
                    remaining: self.max_submissions - updated.count,
                }
            }
            // No window yet, or the previous one has elapsed
            _ => {
                self.store.set(key, SubmissionWindow::started_at(now)).await;
                SubmissionDecision::Allowed {
                    remaining: self.max_submissions - 1,
                }
            }
        }
    }

    /// Drop every window that can no longer reject anything
    pub async fn sweep_expired(&self) {
        let now = unix_now();
        let cutoff = now.saturating_sub(self.window_seconds);
        self.store.sweep(cutoff).await;
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
