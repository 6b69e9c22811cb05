//! Project listing use cases

pub mod transformer;

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::domain::Project;
use crate::infrastructure::api_clients::github::{FetchOptions, RepositoryHost};
use crate::infrastructure::cache::MemoryCache;

pub use transformer::{transform_repositories, transform_repository};

/// Fetches a user's repositories and yields display-ready projects.
///
/// Upstream failures never propagate: any fetch or decode error is logged and
/// degraded to an empty list, so callers always receive a usable (possibly
/// empty) collection.
pub struct ListProjectsUseCase {
    host: Arc<dyn RepositoryHost>,
    cache: Arc<MemoryCache>,
}

impl ListProjectsUseCase {
    pub fn new(host: Arc<dyn RepositoryHost>, cache: Arc<MemoryCache>) -> Self {
        Self { host, cache }
    }

    /// List projects for a username, newest-first
    pub async fn execute(&self, username: &str) -> Vec<Project> {
        let cache_key = format!("projects:{username}");

        match self.cache.get::<Vec<Project>>(&cache_key).await {
            Ok(Some(projects)) => {
                debug!(username, count = projects.len(), "Project list cache hit");
                return projects;
            }
            Ok(None) => {}
            Err(e) => debug!(username, error = %e, "Project list cache read failed"),
        }

        let projects = match self
            .host
            .fetch_user_repositories(username, &FetchOptions::default())
            .await
        {
            Ok(repos) => {
                let projects = transformer::transform_repositories(&repos, Utc::now());
                info!(username, count = projects.len(), "Fetched and transformed repositories");
                projects
            }
            Err(e) => {
                error!(username, error = %e, "Repository fetch failed, returning empty project list");
                return Vec::new();
            }
        };

        if let Err(e) = self.cache.set(&cache_key, &projects).await {
            debug!(username, error = %e, "Project list cache write failed");
        }

        projects
    }

    /// Find a single project by slug. Duplicate slugs resolve to the last
    /// occurrence in fetch order.
    pub async fn find_by_slug(&self, username: &str, slug: &str) -> Option<Project> {
        self.execute(username)
            .await
            .into_iter()
            .filter(|project| project.slug == slug)
            .next_back()
    }
}
