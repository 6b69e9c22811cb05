//! Application setup and wiring

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::application::contact::SubmitContactUseCase;
use crate::application::media::{FetchMediaImageUseCase, ListMediaUseCase};
use crate::application::projects::ListProjectsUseCase;
use crate::config::Config;
use crate::infrastructure::api_clients::drive::{DriveClient, MediaStore};
use crate::infrastructure::api_clients::email::EmailClient;
use crate::infrastructure::api_clients::github::GitHubClient;
use crate::infrastructure::cache::MemoryCache;
use crate::infrastructure::rate_limiter::{InMemoryRateLimitStore, SubmissionLimiter};
use crate::presentation::controllers::{AppState, MediaState};
use crate::presentation::routes::create_router;

/// Handle returned from create_app for graceful shutdown coordination
pub struct AppHandle {
    pub router: Router,
    pub shutdown_token: CancellationToken,
}

/// Errors during application startup
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to build GitHub client: {0}")]
    GitHub(#[from] crate::infrastructure::api_clients::github::GitHubError),

    #[error("Failed to build drive client: {0}")]
    Drive(#[from] crate::infrastructure::api_clients::drive::DriveError),

    #[error("Failed to build email client: {0}")]
    Email(#[from] crate::infrastructure::api_clients::email::EmailError),
}

/// Spawns the periodic sweep that purges stale rate limit windows.
/// Respects the cancellation token for graceful shutdown.
fn spawn_rate_limit_sweep(
    limiter: Arc<SubmissionLimiter>,
    sweep_interval: Duration,
    shutdown_token: CancellationToken,
) {
    tokio::spawn(async move {
        let mut interval_timer = tokio::time::interval(sweep_interval);
        // The first tick fires immediately; nothing to sweep yet
        interval_timer.tick().await;

        loop {
            tokio::select! {
                _ = interval_timer.tick() => {
                    limiter.sweep_expired().await;
                }
                _ = shutdown_token.cancelled() => {
                    tracing::info!("Rate limit sweep task cancelled due to shutdown");
                    return;
                }
            }
        }
    });
}

/// Create the application router and its background tasks
pub fn create_app(config: Config) -> Result<AppHandle, AppError> {
    let shutdown_token = CancellationToken::new();

    let github_client = Arc::new(GitHubClient::from_config(&config.apis.github)?);
    let project_cache = Arc::new(MemoryCache::new(
        config.cache.max_entries,
        config.cache.ttl_seconds,
    ));
    let projects = Arc::new(ListProjectsUseCase::new(github_client, project_cache));

    let rate_limit = &config.contact.rate_limit;
    let limiter = Arc::new(SubmissionLimiter::new(
        Arc::new(InMemoryRateLimitStore::new()),
        rate_limit.max_submissions,
        rate_limit.window_seconds,
    ));
    spawn_rate_limit_sweep(
        limiter.clone(),
        Duration::from_secs(rate_limit.sweep_interval_seconds),
        shutdown_token.clone(),
    );

    let email_client = Arc::new(EmailClient::new(&config.apis.email)?);
    let contact = Arc::new(SubmitContactUseCase::new(
        email_client,
        limiter,
        config.apis.email.clone(),
    ));

    // Media endpoints stay up but answer 500 until the drive is configured
    let media = match (
        config.apis.drive.token.clone().filter(|t| !t.is_empty()),
        config.apis.drive.folder_id.clone().filter(|f| !f.is_empty()),
    ) {
        (Some(token), Some(folder_id)) => {
            let store: Arc<dyn MediaStore> =
                Arc::new(DriveClient::new(&config.apis.drive, token, folder_id)?);
            Some(MediaState {
                list: Arc::new(ListMediaUseCase::new(store.clone())),
                fetch_image: Arc::new(FetchMediaImageUseCase::new(store)),
            })
        }
        _ => {
            tracing::warn!("Drive token or folder id missing; media endpoints disabled");
            None
        }
    };

    let app_state = AppState {
        projects,
        contact,
        media,
        default_username: config.apis.github.default_username.clone(),
    };

    let router = create_router(app_state, &config);

    Ok(AppHandle {
        router,
        shutdown_token,
    })
}
