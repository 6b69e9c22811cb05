//! HTTP middleware and error mapping

use axum::{
    Json,
    extract::Request,
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use uuid::Uuid;

use crate::application::ApplicationError;
use crate::presentation::models::ErrorResponse;

/// Map an application error to an HTTP response with the shared failure envelope
pub fn application_error_to_response(error: ApplicationError) -> Response {
    let (status, code, message) = match &error {
        ApplicationError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_failed", message.clone())
        }
        ApplicationError::RateLimited { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            "rate_limit_exceeded",
            "Rate limit exceeded. Please try again later.".to_string(),
        ),
        ApplicationError::Configuration { message } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "not_configured", message.clone())
        }
        ApplicationError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{resource} not found"),
        ),
        ApplicationError::Email(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "email_delivery_failed",
            "An error occurred while sending your message".to_string(),
        ),
        ApplicationError::Media(_) => (
            StatusCode::BAD_GATEWAY,
            "media_unavailable",
            "Media storage is currently unavailable".to_string(),
        ),
        ApplicationError::GitHub(_) | ApplicationError::Json(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "An error occurred while processing your request".to_string(),
        ),
    };

    if status.is_server_error() {
        tracing::error!(error = %error, http_status = %status, error_code = code, "Server error mapped to HTTP response");
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(error = %error, http_status = %status, "Rate limited request");
    } else {
        tracing::debug!(error = %error, http_status = %status, error_code = code, "Client error mapped to HTTP response");
    }

    let body = Json(ErrorResponse::new(code, message));

    if let ApplicationError::RateLimited {
        retry_after_seconds,
    } = &error
    {
        let mut response = (status, body).into_response();
        if let Ok(value) = HeaderValue::from_str(&retry_after_seconds.to_string()) {
            response.headers_mut().insert("retry-after", value);
        }
        return response;
    }

    (status, body).into_response()
}

/// Extract the client identifier from proxy headers, "unknown" when absent
pub fn extract_client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Request logging middleware with timing and request ID
pub async fn logging_middleware(request: Request<axum::body::Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();
    let start_time = Instant::now();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        "Processing request"
    );

    let response = next.run(request).await;
    let duration = start_time.elapsed();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Security headers middleware
pub async fn security_headers_middleware(
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "permissions-policy",
        HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
    );

    response
}
