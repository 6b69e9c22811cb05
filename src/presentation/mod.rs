//! Presentation layer: HTTP controllers, routing, and middleware

pub mod controllers;
pub mod middleware;
pub mod models;
pub mod routes;


pub use controllers::{AppState, MediaState};
pub use routes::create_router;
