//! Application layer: use cases and application services

pub mod contact;
pub mod errors;
pub mod media;
pub mod projects;

pub use errors::ApplicationError;
