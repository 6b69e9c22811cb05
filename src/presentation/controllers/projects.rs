//! Project listing controller

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use tracing::info;

use crate::application::ApplicationError;
use crate::presentation::controllers::AppState;
use crate::presentation::middleware::application_error_to_response;
use crate::presentation::models::{
    ErrorResponse, ProjectResponse, ProjectsQuery, ProjectsResponse,
};

/// GET /api/v1/projects - List portfolio projects derived from GitHub repositories
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    params(ProjectsQuery),
    responses(
        (status = 200, description = "Project list (possibly empty when upstream is unavailable)", body = ProjectsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> Json<ProjectsResponse> {
    let username = query
        .username
        .as_deref()
        .filter(|u| !u.is_empty())
        .unwrap_or(&state.default_username);

    let projects = state.projects.execute(username).await;
    info!(username, count = projects.len(), "Project listing served");

    Json(ProjectsResponse {
        success: true,
        data: projects,
    })
}

/// GET /api/v1/projects/{slug} - Fetch one project by slug
#[utoipa::path(
    get,
    path = "/api/v1/projects/{slug}",
    params(
        ("slug" = String, Path, description = "Project slug (repository name)"),
        ProjectsQuery
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "No project with that slug", body = ErrorResponse)
    ),
    tag = "projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<ProjectResponse>, Response> {
    let username = query
        .username
        .as_deref()
        .filter(|u| !u.is_empty())
        .unwrap_or(&state.default_username);

    match state.projects.find_by_slug(username, &slug).await {
        Some(project) => Ok(Json(ProjectResponse {
            success: true,
            data: project,
        })),
        None => Err(application_error_to_response(ApplicationError::not_found(
            format!("Project '{slug}'"),
        ))),
    }
}
