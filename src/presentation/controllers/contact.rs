//! Contact form controller

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::Response,
};

use crate::application::contact::ContactSubmission;
use crate::presentation::controllers::AppState;
use crate::presentation::middleware::{application_error_to_response, extract_client_ip};
use crate::presentation::models::{ContactRequest, ContactResponse, ErrorResponse};

/// POST /api/v1/contact - Submit the contact form
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message accepted and relayed", body = ContactResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 429, description = "Too many submissions from this client", body = ErrorResponse),
        (status = 500, description = "Email delivery failed or provider not configured", body = ErrorResponse)
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, Response> {
    let client_ip = extract_client_ip(&headers);

    let submission = ContactSubmission {
        name: request.name,
        email: request.email,
        message: request.message,
    };

    let receipt = state
        .contact
        .execute(&client_ip, submission)
        .await
        .map_err(application_error_to_response)?;

    Ok(Json(ContactResponse {
        success: true,
        message: receipt.message,
        id: receipt.id,
    }))
}
