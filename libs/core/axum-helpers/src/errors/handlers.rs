use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{messages, ErrorResponse};

/// Fallback handler for unmatched routes.
///
/// Wired as the router fallback by `create_router` so unknown paths get
/// the same JSON error shape as domain errors.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "NotFound".to_string(),
        message: messages::NOT_FOUND_RESOURCE.to_string(),
        details: None,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
