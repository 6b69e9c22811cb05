//! Domain Layer - Core business entities
//!
//! Contains the normalized portfolio entities derived from external
//! repository and media records.

pub mod project;

pub use project::*;
