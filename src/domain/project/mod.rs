//! Project entities and value objects
//!
//! A [`Project`] is the display-ready entity the pages consume. It is
//! recomputed wholesale from its source repository record on every fetch;
//! the slug is its only identity.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of project category labels.
///
/// Classification is total: every repository maps to exactly one variant,
/// with [`Category::SoftwareDevelopment`] as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "Frontend Development")]
    FrontendDevelopment,
    #[serde(rename = "Backend Development")]
    BackendDevelopment,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "DevOps")]
    DevOps,
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
}

impl Category {
    /// Get the display label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FrontendDevelopment => "Frontend Development",
            Category::BackendDevelopment => "Backend Development",
            Category::MobileDevelopment => "Mobile Development",
            Category::DevOps => "DevOps",
            Category::SoftwareDevelopment => "Software Development",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of external link attached to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Link to the source repository
    Repo,
    /// Link to a live demo / homepage
    Demo,
}

/// External link attached to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: String,
    pub label: String,
}

/// Display image descriptor. Existence of the referenced asset is not
/// verified here; fallback-on-load is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// Titled content section of a project page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectSection {
    pub title: String,
    pub content: String,
}

/// Normalized, display-ready project derived from one repository record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Identifier, equal to the repository name
    pub id: String,
    /// URL slug, equal to the repository name
    pub slug: String,
    /// Human-readable title derived from the repository name
    pub title: String,
    /// Short description shown in listings
    pub summary: String,
    /// Long description; currently the same text as `summary`
    pub description: String,
    /// Technology tags (topics, or the primary language as fallback)
    pub tech: Vec<String>,
    pub category: Category,
    /// Repository creation time
    pub date_start: DateTime<Utc>,
    /// Last push time
    pub date_end: DateTime<Utc>,
    /// Synthetic popularity/freshness metric, always in [0, 100]
    pub impact_score: u8,
    /// Whether the project is surfaced in the featured rail
    pub featured: bool,
    pub links: Vec<ProjectLink>,
    pub images: Vec<ProjectImage>,
    /// Content sections keyed by section id ("overview" is always present)
    pub sections: BTreeMap<String, ProjectSection>,
}
