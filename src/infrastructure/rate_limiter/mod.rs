//! Rate limiting for the contact endpoint

pub mod fixed_window;
pub mod storage;

pub use fixed_window::{SubmissionDecision, SubmissionLimiter};
pub use storage::{InMemoryRateLimitStore, RateLimitStore, SubmissionWindow};
