//! HTTP controllers

pub mod contact;
pub mod health;
pub mod media;
pub mod projects;

use std::sync::Arc;

use crate::application::contact::SubmitContactUseCase;
use crate::application::media::{FetchMediaImageUseCase, ListMediaUseCase};
use crate::application::projects::ListProjectsUseCase;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ListProjectsUseCase>,
    pub contact: Arc<SubmitContactUseCase>,
    /// Present only when the drive token and folder are configured
    pub media: Option<MediaState>,
    /// Username used when the listing request names none
    pub default_username: String,
}

#[derive(Clone)]
pub struct MediaState {
    pub list: Arc<ListMediaUseCase>,
    pub fetch_image: Arc<FetchMediaImageUseCase>,
}
