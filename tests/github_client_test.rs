//! Integration tests for GitHubClient using wiremock

use std::sync::Arc;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_api::application::projects::ListProjectsUseCase;
use folio_api::config::GitHubConfig;
use folio_api::infrastructure::api_clients::github::{
    FetchOptions, GitHubClient, GitHubError, RepositoryHost,
};
use folio_api::infrastructure::cache::MemoryCache;

fn test_config(base_url: &str) -> GitHubConfig {
    GitHubConfig {
        base_url: base_url.to_string(),
        token: Some("test-token".to_string()),
        ..GitHubConfig::default()
    }
}

fn repo_json(name: &str, fork: bool) -> serde_json::Value {
    serde_json::json!({
        "id": 42,
        "name": name,
        "full_name": format!("octocat/{name}"),
        "html_url": format!("https://github.com/octocat/{name}"),
        "description": "A demo repository",
        "created_at": "2022-06-01T00:00:00Z",
        "updated_at": "2024-05-01T00:00:00Z",
        "pushed_at": "2024-05-01T00:00:00Z",
        "homepage": null,
        "stargazers_count": 7,
        "watchers_count": 2,
        "language": "Rust",
        "forks_count": 1,
        "open_issues_count": 0,
        "topics": ["api"],
        "fork": fork
    })
}

#[tokio::test]
async fn test_lists_repositories_with_expected_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("sort", "pushed"))
        .and(query_param("direction", "desc"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .and(query_param("type", "owner"))
        .and(query_param("visibility", "public"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("X-GitHub-Api-Version", "2022-11-28"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([repo_json("site", false)])),
        )
        .mount(&mock_server)
        .await;

    let client = GitHubClient::from_config(&test_config(&mock_server.uri())).unwrap();
    let repos = client
        .fetch_user_repositories("octocat", &FetchOptions::default())
        .await
        .unwrap();

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "site");
    assert_eq!(repos[0].stargazers_count, 7);
}

#[tokio::test]
async fn test_forks_are_filtered_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            repo_json("original", false),
            repo_json("forked", true),
            repo_json("another", false)
        ])))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::from_config(&test_config(&mock_server.uri())).unwrap();
    let repos = client
        .fetch_user_repositories("octocat", &FetchOptions::default())
        .await
        .unwrap();

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["original", "another"]);
}

#[tokio::test]
async fn test_forks_kept_when_not_excluded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            repo_json("original", false),
            repo_json("forked", true)
        ])))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::from_config(&test_config(&mock_server.uri())).unwrap();
    let options = FetchOptions {
        exclude_forks: false,
        ..FetchOptions::default()
    };
    let repos = client
        .fetch_user_repositories("octocat", &options)
        .await
        .unwrap();

    assert_eq!(repos.len(), 2);
}

#[tokio::test]
async fn test_non_success_status_is_a_tagged_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::from_config(&test_config(&mock_server.uri())).unwrap();
    let err = client
        .fetch_user_repositories("octocat", &FetchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubError::Status { status } if status.as_u16() == 500));
}

#[tokio::test]
async fn test_malformed_payload_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::from_config(&test_config(&mock_server.uri())).unwrap();
    let err = client
        .fetch_user_repositories("octocat", &FetchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GitHubError::Decode(_)));
}

#[tokio::test]
async fn test_upstream_500_yields_empty_project_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = Arc::new(GitHubClient::from_config(&test_config(&mock_server.uri())).unwrap());
    let use_case = ListProjectsUseCase::new(client, Arc::new(MemoryCache::new(16, 60)));

    let projects = use_case.execute("octocat").await;
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_readme_is_base64_decoded() {
    let mock_server = MockServer::start().await;

    // "# Hello\n" encoded with the usual 60-column wrapping
    Mock::given(method("GET"))
        .and(path("/repos/octocat/site/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "IyBIZWxs\nbwo=",
            "encoding": "base64"
        })))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::from_config(&test_config(&mock_server.uri())).unwrap();
    let readme = client
        .fetch_repository_readme("octocat", "site")
        .await
        .unwrap();

    assert_eq!(readme.as_deref(), Some("# Hello\n"));
}

#[tokio::test]
async fn test_missing_readme_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/empty/readme"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::from_config(&test_config(&mock_server.uri())).unwrap();
    let readme = client
        .fetch_repository_readme("octocat", "empty")
        .await
        .unwrap();

    assert!(readme.is_none());
}
