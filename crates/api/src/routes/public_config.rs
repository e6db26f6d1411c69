//! Public configuration endpoint.
//!
//! Exposes the configuration the front end needs before rendering,
//! such as the map-imagery key. This endpoint is unauthenticated.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Public configuration response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PublicConfigResponse {
    /// Map imagery configuration
    pub maps: MapsPublicConfig,
}

/// Map-imagery configuration visible to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MapsPublicConfig {
    /// Whether static map imagery is configured
    pub enabled: bool,
    /// Publishable imagery key, empty when the feature is off
    pub static_api_key: String,
}

/// GET /api/v1/config/public
///
/// Returns the publishable configuration for site rendering.
pub async fn get_public_config(State(state): State<AppState>) -> Json<PublicConfigResponse> {
    let key = &state.config.maps.static_api_key;

    Json(PublicConfigResponse {
        maps: MapsPublicConfig {
            enabled: !key.is_empty(),
            static_api_key: key.clone(),
        },
    })
}
