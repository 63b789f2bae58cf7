// src/api/http/mod.rs
// Router composition and the outermost error boundary.

pub mod handlers;

use std::any::Any;

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use super::{ApiError, Envelope};
use crate::state::AppState;
use handlers::{bfhl_handler, health_handler, not_found_handler};

/// Transport-level body cap. The 10KB payload limit is enforced inside the
/// handler so it can answer with the envelope; this only guards against
/// grossly oversized uploads.
const MAX_TRANSPORT_BODY_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Any panic below becomes a generic 500 envelope; detail goes to the log.
    let official_email = state.config.official_email.clone();
    let catch_panic = CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
        let detail = if let Some(s) = panic.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        error!("handler panicked: {}", detail);

        let err = ApiError::internal("Internal server error");
        internal_error_response(&official_email, err)
    });

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/bfhl",
            post(bfhl_handler)
                .layer(axum::extract::DefaultBodyLimit::max(MAX_TRANSPORT_BODY_BYTES)),
        )
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .layer(catch_panic)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn internal_error_response(official_email: &str, err: ApiError) -> Response {
    debug_assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    (
        err.status_code,
        Json(Envelope::failure(official_email, err.message)),
    )
        .into_response()
}
