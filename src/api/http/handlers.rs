// src/api/http/handlers.rs

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::api::Envelope;
use crate::ops;
use crate::state::AppState;

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(Envelope::success(&state.config.official_email, None))
}

/// POST /bfhl
///
/// The body is read raw so that the payload cap and the JSON-parse error can
/// both answer with the standard envelope instead of axum's plain-text
/// rejections.
pub async fn bfhl_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let email = &state.config.official_email;

    if body.len() > state.config.limits.request_payload_max_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(Envelope::failure(email, "Request payload too large")),
        )
            .into_response();
    }

    let decoded: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(Envelope::failure(email, "Invalid JSON in request body")),
            )
                .into_response();
        }
    };

    let result = match ops::classify(&decoded) {
        Ok((op, value)) => ops::dispatch(&state, op, value).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(data) => (
            StatusCode::OK,
            Json(Envelope::success(email, Some(data))),
        )
            .into_response(),
        Err(err) => (
            err.status_code,
            Json(Envelope::failure(email, err.message)),
        )
            .into_response(),
    }
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::failure(
            &state.config.official_email,
            "Endpoint not found",
        )),
    )
}
