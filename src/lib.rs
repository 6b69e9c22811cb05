//! Folio API - Personal portfolio site backend
//!
//! HTTP service exposing a GitHub-derived project showcase, a rate-limited
//! contact form relay, and a cloud-drive photo gallery.
//!
//! Layers follow a simple domain-driven layout:
//! - `domain` - the Project entity and its value types
//! - `application` - use cases (listing, contact relay, media)
//! - `infrastructure` - outbound API clients, caching, rate limiting
//! - `presentation` - axum controllers, routing, middleware

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use app::{AppHandle, create_app};
pub use config::Config;
pub use logging::init_tracing;
