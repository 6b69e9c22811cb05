//! Infrastructure layer: outbound API clients, caching, and rate limiting

pub mod api_clients;
pub mod cache;
pub mod rate_limiter;
