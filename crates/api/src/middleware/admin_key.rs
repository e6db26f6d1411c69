//! Admin key middleware.
//!
//! Guards the admin clinic-update surface. The configured key and the
//! presented `X-Admin-Key` header are compared by SHA-256 digest. An
//! empty configured key disables the surface: every request is rejected.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the admin key.
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Middleware for admin-only routes.
pub async fn require_admin_key(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let configured = &state.config.security.admin_api_key;
    if configured.is_empty() {
        return ApiError::Unauthorized("Admin surface is disabled".into()).into_response();
    }

    let presented = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if shared::admin_key::verify_key(key, configured) => next.run(req).await,
        Some(_) => {
            tracing::warn!("Rejected admin request with invalid key");
            ApiError::Unauthorized("Invalid admin key".into()).into_response()
        }
        None => ApiError::Unauthorized("Missing admin key".into()).into_response(),
    }
}
