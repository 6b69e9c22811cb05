//! Route definitions and router setup

use std::time::Duration;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::Config;
use crate::presentation::{
    controllers::{
        AppState,
        contact::submit_contact,
        health::health_check,
        media::{fetch_media_image, list_media},
        projects::{get_project, list_projects},
    },
    middleware::{logging_middleware, security_headers_middleware},
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::projects::list_projects,
        crate::presentation::controllers::projects::get_project,
        crate::presentation::controllers::contact::submit_contact,
        crate::presentation::controllers::media::list_media,
        crate::presentation::controllers::media::fetch_media_image,
        crate::presentation::controllers::health::health_check
    ),
    components(
        schemas(
            ProjectsResponse,
            ProjectResponse,
            ContactRequest,
            ContactResponse,
            MediaResponse,
            ErrorResponse,
            HealthResponse,
            crate::domain::Project,
            crate::domain::ProjectLink,
            crate::domain::ProjectImage,
            crate::domain::ProjectSection,
            crate::domain::Category,
            crate::domain::LinkKind,
            crate::application::media::MediaItem
        )
    ),
    tags(
        (name = "projects", description = "Portfolio projects derived from GitHub repositories"),
        (name = "contact", description = "Contact form submission"),
        (name = "media", description = "Photo gallery sourced from a cloud drive folder"),
        (name = "health", description = "System health monitoring")
    ),
    info(
        title = "Folio API",
        version = "1.0.0",
        description = "Backend for a personal portfolio site: GitHub-derived project showcase, contact form relay, and a cloud-drive photo gallery."
    )
)]
pub struct ApiDoc;

/// Create the application router with the middleware stack
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let api_routes = Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{slug}", get(get_project))
        .route("/contact", post(submit_contact))
        .route("/media", get(list_media))
        .route("/media/image/{id}", get(fetch_media_image));

    let cors_layer =
        if config.server.allowed_origins.len() == 1 && config.server.allowed_origins[0] == "*" {
            CorsLayer::new()
                .allow_origin(tower_http::cors::AllowOrigin::mirror_request())
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ])
                .max_age(Duration::from_secs(3600))
        } else {
            let mut layer = CorsLayer::new();
            for origin in &config.server.allowed_origins {
                match axum::http::HeaderValue::from_str(origin) {
                    Ok(origin_header) => {
                        layer = layer.allow_origin(origin_header);
                    }
                    Err(_) => {
                        tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                    }
                }
            }
            layer
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ])
                .max_age(Duration::from_secs(3600))
        };

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check));

    // Keep docs out of hardened deployments
    if config.server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    if config.server.enable_security_headers {
        router = router.layer(middleware::from_fn(security_headers_middleware));
    }

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )))
        .layer(middleware::from_fn(logging_middleware));

    router.layer(service_builder).with_state(app_state)
}
