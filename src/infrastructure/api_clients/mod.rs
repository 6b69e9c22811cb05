//! External API client implementations

pub mod drive;
pub mod email;
pub mod github;

pub use drive::{DriveClient, DriveError, DriveFile, DriveMedia, MediaStore};
pub use email::{EmailClient, EmailError, EmailSender, OutboundEmail};
pub use github::{FetchOptions, GitHubClient, GitHubError, GitHubRepo, RepositoryHost};
