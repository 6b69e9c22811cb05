//! GitHub REST API client implementation

use async_trait::async_trait;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GitHubConfig;

/// Raw repository record as reported by the GitHub REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    pub homepage: Option<String>,
    pub stargazers_count: u32,
    pub watchers_count: u32,
    pub language: Option<String>,
    pub forks_count: u32,
    pub open_issues_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    pub fork: bool,
}

/// Repository list sort field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoSort {
    Created,
    Updated,
    #[default]
    Pushed,
    FullName,
}

impl RepoSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoSort::Created => "created",
            RepoSort::Updated => "updated",
            RepoSort::Pushed => "pushed",
            RepoSort::FullName => "full_name",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Repository affiliation filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoType {
    All,
    #[default]
    Owner,
    Member,
}

impl RepoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoType::All => "all",
            RepoType::Owner => "owner",
            RepoType::Member => "member",
        }
    }
}

/// Repository visibility filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoVisibility {
    #[default]
    Public,
    Private,
    Internal,
}

impl RepoVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoVisibility::Public => "public",
            RepoVisibility::Private => "private",
            RepoVisibility::Internal => "internal",
        }
    }
}

/// Options for a repository list request
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub sort: RepoSort,
    pub direction: SortDirection,
    pub per_page: u32,
    pub page: u32,
    pub r#type: RepoType,
    pub visibility: RepoVisibility,
    /// When set, records with the fork flag are dropped from the result
    pub exclude_forks: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            sort: RepoSort::default(),
            direction: SortDirection::default(),
            per_page: 100,
            page: 1,
            r#type: RepoType::default(),
            visibility: RepoVisibility::default(),
            exclude_forks: true,
        }
    }
}

/// Error talking to the GitHub API.
///
/// Failure modes are kept distinct (transport vs. status vs. payload) even
/// though the listing surface degrades them all to an empty result.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error("GitHub request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GitHub API returned {status}")]
    Status { status: StatusCode },

    #[error("Failed to decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to decode README content: {0}")]
    Content(String),
}

/// Source of repository records for the project pipeline
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// List a user's repositories, newest-first under the default sort
    async fn fetch_user_repositories(
        &self,
        username: &str,
        options: &FetchOptions,
    ) -> Result<Vec<GitHubRepo>, GitHubError>;

    /// Fetch a repository's README, decoded to UTF-8. `Ok(None)` when the
    /// repository has no README.
    async fn fetch_repository_readme(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<String>, GitHubError>;
}

#[derive(Debug, Deserialize)]
struct ReadmePayload {
    content: Option<String>,
}

/// Client for the GitHub REST API
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    api_version: String,
}

impl GitHubClient {
    /// Create a new client from configuration
    pub fn from_config(config: &GitHubConfig) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("folio-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config
                .token
                .clone()
                .filter(|token| !token.trim().is_empty()),
            api_version: config.api_version.clone(),
        })
    }

    fn request(&self, url: String) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .header("X-GitHub-Api-Version", &self.api_version);

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        builder
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn fetch_user_repositories(
        &self,
        username: &str,
        options: &FetchOptions,
    ) -> Result<Vec<GitHubRepo>, GitHubError> {
        let url = format!("{}/users/{}/repos", self.base_url, username);

        let response = self
            .request(url)
            .query(&[
                ("sort", options.sort.as_str()),
                ("direction", options.direction.as_str()),
                ("per_page", &options.per_page.to_string()),
                ("page", &options.page.to_string()),
                ("type", options.r#type.as_str()),
                ("visibility", options.visibility.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status { status });
        }

        let body = response.text().await?;
        let mut repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;

        if options.exclude_forks {
            repos.retain(|repo| !repo.fork);
        }

        Ok(repos)
    }

    async fn fetch_repository_readme(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<String>, GitHubError> {
        let url = format!("{}/repos/{}/{}/readme", self.base_url, owner, repo);

        let response = self.request(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(GitHubError::Status { status });
        }

        let body = response.text().await?;
        let payload: ReadmePayload = serde_json::from_str(&body)?;

        match payload.content {
            Some(encoded) => {
                // GitHub wraps base64 content at 60 columns
                let stripped: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(stripped)
                    .map_err(|e| GitHubError::Content(e.to_string()))?;
                let text =
                    String::from_utf8(bytes).map_err(|e| GitHubError::Content(e.to_string()))?;
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_options_defaults_match_listing_contract() {
        let options = FetchOptions::default();
        assert_eq!(options.sort, RepoSort::Pushed);
        assert_eq!(options.direction, SortDirection::Desc);
        assert_eq!(options.per_page, 100);
        assert_eq!(options.page, 1);
        assert_eq!(options.r#type, RepoType::Owner);
        assert_eq!(options.visibility, RepoVisibility::Public);
        assert!(options.exclude_forks);
    }

    #[test]
    fn query_values_are_wire_compatible() {
        assert_eq!(RepoSort::FullName.as_str(), "full_name");
        assert_eq!(SortDirection::Asc.as_str(), "asc");
        assert_eq!(RepoType::Member.as_str(), "member");
        assert_eq!(RepoVisibility::Internal.as_str(), "internal");
    }

    #[test]
    fn repo_record_deserializes_with_nullable_fields() {
        let json = serde_json::json!({
            "id": 1,
            "name": "demo",
            "full_name": "octocat/demo",
            "html_url": "https://github.com/octocat/demo",
            "description": null,
            "created_at": "2023-01-10T12:00:00Z",
            "updated_at": "2024-01-10T12:00:00Z",
            "pushed_at": "2024-02-10T12:00:00Z",
            "homepage": null,
            "stargazers_count": 0,
            "watchers_count": 0,
            "language": null,
            "forks_count": 0,
            "open_issues_count": 0,
            "fork": false
        });

        let repo: GitHubRepo = serde_json::from_value(json).unwrap();
        assert_eq!(repo.name, "demo");
        assert!(repo.description.is_none());
        assert!(repo.topics.is_empty());
    }
}
