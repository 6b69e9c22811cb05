//! Repository-to-project transformation and scoring
//!
//! Pure, deterministic mapping from raw repository records to display-ready
//! [`Project`] entities. The only time dependence is the recency term of the
//! impact score, so every function takes the reference instant explicitly.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::{Category, LinkKind, Project, ProjectImage, ProjectLink, ProjectSection};
use crate::infrastructure::api_clients::github::GitHubRepo;

const FRONTEND_TOPICS: &[&str] = &["frontend", "ui", "react", "vue", "angular", "website"];
const BACKEND_TOPICS: &[&str] = &["backend", "api", "server", "database"];
const MOBILE_TOPICS: &[&str] = &["mobile", "android", "ios", "flutter", "react-native"];
const DEVOPS_TOPICS: &[&str] = &["devops", "ci-cd", "docker", "kubernetes", "aws", "cloud"];

const FRONTEND_LANGUAGES: &[&str] = &["javascript", "typescript", "html", "css", "vue", "react"];
const BACKEND_LANGUAGES: &[&str] = &["go", "python", "java", "c#", "php", "ruby", "rust", "node"];
const MOBILE_LANGUAGES: &[&str] = &["kotlin", "swift", "dart", "objective-c"];

/// Transform a fetched repository list into projects, preserving order
pub fn transform_repositories(repos: &[GitHubRepo], now: DateTime<Utc>) -> Vec<Project> {
    repos.iter().map(|repo| transform_repository(repo, now)).collect()
}

/// Transform a single repository record into a project
pub fn transform_repository(repo: &GitHubRepo, now: DateTime<Utc>) -> Project {
    let summary = summarize(repo);

    let mut links = vec![ProjectLink {
        kind: LinkKind::Repo,
        url: repo.html_url.clone(),
        label: "View Repository".to_string(),
    }];
    if let Some(homepage) = repo.homepage.as_deref().filter(|h| !h.is_empty()) {
        links.push(ProjectLink {
            kind: LinkKind::Demo,
            url: homepage.to_string(),
            label: "View Demo".to_string(),
        });
    }

    let images = vec![ProjectImage {
        src: format!("/images/projects/github/{}.jpg", repo.name),
        alt: format!("{} preview", repo.name),
        width: 800,
        height: 600,
    }];

    let mut sections = BTreeMap::new();
    sections.insert(
        "overview".to_string(),
        ProjectSection {
            title: "Project Overview".to_string(),
            content: summary.clone(),
        },
    );

    Project {
        id: repo.name.clone(),
        slug: repo.name.clone(),
        title: format_repo_name(&repo.name),
        summary: summary.clone(),
        description: summary,
        tech: tech_tags(repo),
        category: categorize(repo),
        date_start: repo.created_at,
        date_end: repo.pushed_at,
        impact_score: impact_score(repo, now),
        featured: repo.stargazers_count > 0,
        links,
        images,
        sections,
    }
}

/// `"my-cool_repo"` becomes `"My Cool Repo"`
pub fn format_repo_name(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn summarize(repo: &GitHubRepo) -> String {
    match repo.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => description.to_string(),
        None => format!(
            "A {} project hosted on GitHub.",
            repo.language.as_deref().unwrap_or("software")
        ),
    }
}

fn tech_tags(repo: &GitHubRepo) -> Vec<String> {
    if !repo.topics.is_empty() {
        repo.topics.clone()
    } else if let Some(language) = repo.language.clone() {
        vec![language]
    } else {
        vec!["Software Development".to_string()]
    }
}

/// Categorize by topic labels first, then by primary language
pub fn categorize(repo: &GitHubRepo) -> Category {
    let topics: Vec<String> = repo.topics.iter().map(|t| t.to_lowercase()).collect();
    let has_topic = |group: &[&str]| topics.iter().any(|t| group.contains(&t.as_str()));

    if has_topic(FRONTEND_TOPICS) {
        return Category::FrontendDevelopment;
    }
    if has_topic(BACKEND_TOPICS) {
        return Category::BackendDevelopment;
    }
    if has_topic(MOBILE_TOPICS) {
        return Category::MobileDevelopment;
    }
    if has_topic(DEVOPS_TOPICS) {
        return Category::DevOps;
    }

    if let Some(language) = repo.language.as_deref() {
        let lang = language.to_lowercase();
        if FRONTEND_LANGUAGES.contains(&lang.as_str()) {
            return Category::FrontendDevelopment;
        }
        if BACKEND_LANGUAGES.contains(&lang.as_str()) {
            return Category::BackendDevelopment;
        }
        if MOBILE_LANGUAGES.contains(&lang.as_str()) {
            return Category::MobileDevelopment;
        }
    }

    Category::SoftwareDevelopment
}

/// Popularity/freshness score clamped to [0, 100]
pub fn impact_score(repo: &GitHubRepo, now: DateTime<Utc>) -> u8 {
    let mut score: i64 = 50;
    score += i64::from(repo.stargazers_count).min(25);
    score += (i64::from(repo.forks_count) * 2).min(15);
    score += i64::from(repo.watchers_count).min(10);
    // Half a point per open issue, rounded up, capped at 10
    score -= i64::from(repo.open_issues_count.div_ceil(2)).min(10);

    let days_since_push = (now - repo.pushed_at).num_days();
    let months_since_push = days_since_push as f64 / 30.0;
    if months_since_push < 1.0 {
        score += 10;
    } else if months_since_push < 3.0 {
        score += 5;
    } else if months_since_push > 12.0 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn repo(name: &str) -> GitHubRepo {
        GitHubRepo {
            id: 1,
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            html_url: format!("https://github.com/octocat/{name}"),
            description: None,
            created_at: "2022-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            pushed_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            homepage: None,
            stargazers_count: 0,
            watchers_count: 0,
            language: None,
            forks_count: 0,
            open_issues_count: 0,
            topics: vec![],
            fork: false,
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-06-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_title_formatting() {
        assert_eq!(format_repo_name("my-cool_repo"), "My Cool Repo");
        assert_eq!(format_repo_name("portfolio"), "Portfolio");
        assert_eq!(format_repo_name("a"), "A");
    }

    #[test]
    fn test_summary_prefers_description() {
        let mut r = repo("demo");
        r.description = Some("A tiny demo.".to_string());
        let project = transform_repository(&r, now());
        assert_eq!(project.summary, "A tiny demo.");
        assert_eq!(project.sections["overview"].content, "A tiny demo.");
    }

    #[test]
    fn test_summary_fallback_uses_language() {
        let mut r = repo("demo");
        r.language = Some("Rust".to_string());
        let project = transform_repository(&r, now());
        assert_eq!(project.summary, "A Rust project hosted on GitHub.");

        r.language = None;
        let project = transform_repository(&r, now());
        assert_eq!(project.summary, "A software project hosted on GitHub.");
    }

    #[test]
    fn test_empty_description_falls_back() {
        let mut r = repo("demo");
        r.description = Some(String::new());
        let project = transform_repository(&r, now());
        assert_eq!(project.summary, "A software project hosted on GitHub.");
    }

    #[test]
    fn test_tech_tag_fallback_chain() {
        let mut r = repo("demo");
        r.topics = vec!["rust".to_string(), "cli".to_string()];
        r.language = Some("Rust".to_string());
        assert_eq!(tech_tags(&r), vec!["rust", "cli"]);

        r.topics.clear();
        assert_eq!(tech_tags(&r), vec!["Rust"]);

        r.language = None;
        assert_eq!(tech_tags(&r), vec!["Software Development"]);
    }

    #[test]
    fn test_category_topic_priority_over_language() {
        let mut r = repo("demo");
        r.topics = vec!["UI".to_string()];
        r.language = Some("Go".to_string());
        assert_eq!(categorize(&r), Category::FrontendDevelopment);
    }

    #[test]
    fn test_category_topic_groups() {
        let mut r = repo("demo");

        r.topics = vec!["api".to_string()];
        assert_eq!(categorize(&r), Category::BackendDevelopment);

        r.topics = vec!["react-native".to_string()];
        assert_eq!(categorize(&r), Category::MobileDevelopment);

        r.topics = vec!["kubernetes".to_string()];
        assert_eq!(categorize(&r), Category::DevOps);
    }

    #[test]
    fn test_category_language_fallback() {
        let mut r = repo("demo");

        r.language = Some("TypeScript".to_string());
        assert_eq!(categorize(&r), Category::FrontendDevelopment);

        r.language = Some("Rust".to_string());
        assert_eq!(categorize(&r), Category::BackendDevelopment);

        r.language = Some("Swift".to_string());
        assert_eq!(categorize(&r), Category::MobileDevelopment);

        r.language = Some("COBOL".to_string());
        assert_eq!(categorize(&r), Category::SoftwareDevelopment);

        r.language = None;
        assert_eq!(categorize(&r), Category::SoftwareDevelopment);
    }

    #[test]
    fn test_impact_score_worked_example() {
        // 50 + 10 stars + 6 (3 forks) + 2 watchers - 1 (1 issue) + 10 recent
        let mut r = repo("demo");
        r.stargazers_count = 10;
        r.forks_count = 3;
        r.watchers_count = 2;
        r.open_issues_count = 1;
        let reference = now();
        r.pushed_at = reference - Duration::days(10);
        assert_eq!(impact_score(&r, reference), 77);
    }

    #[test]
    fn test_impact_score_stale_repository() {
        let mut r = repo("demo");
        let reference = now();
        r.pushed_at = reference - Duration::days(400);
        assert_eq!(impact_score(&r, reference), 40);
    }

    #[test]
    fn test_impact_score_caps_each_signal() {
        let mut r = repo("demo");
        r.stargazers_count = 10_000;
        r.forks_count = 500;
        r.watchers_count = 900;
        let reference = now();
        r.pushed_at = reference - Duration::days(1);
        // 50 + 25 + 15 + 10 + 10 = 110, clamped
        assert_eq!(impact_score(&r, reference), 100);
    }

    #[test]
    fn test_impact_score_recency_bands() {
        let mut r = repo("demo");
        let reference = now();

        r.pushed_at = reference - Duration::days(60);
        assert_eq!(impact_score(&r, reference), 55);

        r.pushed_at = reference - Duration::days(200);
        assert_eq!(impact_score(&r, reference), 50);
    }

    #[test]
    fn test_impact_score_never_leaves_bounds() {
        let mut r = repo("demo");
        r.open_issues_count = 10_000;
        let reference = now();
        r.pushed_at = reference - Duration::days(4000);
        let score = impact_score(&r, reference);
        assert_eq!(score, 30);
        assert!(score <= 100);
    }

    #[test]
    fn test_featured_requires_stars() {
        let mut r = repo("demo");
        assert!(!transform_repository(&r, now()).featured);
        r.stargazers_count = 1;
        assert!(transform_repository(&r, now()).featured);
    }

    #[test]
    fn test_links_include_homepage_when_declared() {
        let mut r = repo("demo");
        let project = transform_repository(&r, now());
        assert_eq!(project.links.len(), 1);
        assert_eq!(project.links[0].kind, LinkKind::Repo);

        r.homepage = Some("https://demo.example.com".to_string());
        let project = transform_repository(&r, now());
        assert_eq!(project.links.len(), 2);
        assert_eq!(project.links[1].kind, LinkKind::Demo);
        assert_eq!(project.links[1].url, "https://demo.example.com");
    }

    #[test]
    fn test_empty_homepage_adds_no_demo_link() {
        let mut r = repo("demo");
        r.homepage = Some(String::new());
        let project = transform_repository(&r, now());
        assert_eq!(project.links.len(), 1);
    }

    #[test]
    fn test_placeholder_image_path_derives_from_name() {
        let project = transform_repository(&repo("site"), now());
        assert_eq!(project.images.len(), 1);
        assert_eq!(project.images[0].src, "/images/projects/github/site.jpg");
        assert_eq!(project.images[0].alt, "site preview");
    }

    #[test]
    fn test_date_range_from_timestamps() {
        let r = repo("demo");
        let project = transform_repository(&r, now());
        assert_eq!(project.date_start, r.created_at);
        assert_eq!(project.date_end, r.pushed_at);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let mut r = repo("demo");
        r.stargazers_count = 3;
        r.topics = vec!["api".to_string()];
        let reference = now();

        let first = transform_repositories(&[r.clone()], reference);
        let second = transform_repositories(&[r], reference);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
