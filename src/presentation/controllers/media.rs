//! Media gallery controllers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;
use crate::presentation::controllers::{AppState, MediaState};
use crate::presentation::middleware::application_error_to_response;
use crate::presentation::models::{ErrorResponse, MediaQuery, MediaResponse};

fn media_state(state: &AppState) -> Result<&MediaState, Response> {
    state.media.as_ref().ok_or_else(|| {
        application_error_to_response(ApplicationError::configuration(
            "Media storage is not configured",
        ))
    })
}

/// GET /api/v1/media - List gallery images
#[utoipa::path(
    get,
    path = "/api/v1/media",
    params(MediaQuery),
    responses(
        (status = 200, description = "Gallery listing", body = MediaResponse),
        (status = 500, description = "Media storage not configured", body = ErrorResponse),
        (status = 502, description = "Media storage unavailable", body = ErrorResponse)
    ),
    tag = "media"
)]
pub async fn list_media(
    State(state): State<AppState>,
    Query(query): Query<MediaQuery>,
) -> Result<Response, Response> {
    let media = media_state(&state)?;

    let items = media
        .list
        .execute(query.limit)
        .await
        .map_err(application_error_to_response)?;

    // Listing order can change as files are added; keep clients fresh
    Ok((
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(MediaResponse {
            success: true,
            data: items,
        }),
    )
        .into_response())
}

/// GET /api/v1/media/image/{id} - Proxy one gallery image's bytes
#[utoipa::path(
    get,
    path = "/api/v1/media/image/{id}",
    params(("id" = String, Path, description = "Drive file identifier")),
    responses(
        (status = 200, description = "Image bytes", content_type = "image/*"),
        (status = 500, description = "Media storage not configured", body = ErrorResponse),
        (status = 502, description = "Media storage unavailable", body = ErrorResponse)
    ),
    tag = "media"
)]
pub async fn fetch_media_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, Response> {
    let media = media_state(&state)?;

    let image = media
        .fetch_image
        .execute(&id)
        .await
        .map_err(application_error_to_response)?;

    let content_type = HeaderValue::from_str(&image.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=86400"),
            ),
        ],
        image.bytes,
    )
        .into_response())
}
