use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin_key, security_headers_middleware, trace_id,
};
use crate::routes::{appointments, clinics, health, pages, public_config, sites, theme};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Tenant site routes (public, read-mostly; the appointment POST is the
    // one public write)
    let site_routes = Router::new()
        .route("/api/v1/sites", get(sites::get_default_site))
        .route("/api/v1/sites/by-path", get(sites::get_site_by_path))
        .route("/api/v1/sites/:slug", get(sites::get_site))
        .route(
            "/api/v1/sites/:slug/appointments",
            post(appointments::submit_appointment),
        )
        .route("/api/v1/content", get(sites::get_default_content))
        .route("/api/v1/content/:slug", get(sites::get_content));

    // Global, non-tenant routes
    let global_routes = Router::new()
        .route("/api/v1/pages", get(pages::list_pages))
        .route("/api/v1/pages/:page", get(pages::get_page))
        .route(
            "/api/v1/preferences/theme",
            get(theme::get_theme).put(theme::put_theme),
        )
        .route(
            "/api/v1/config/public",
            get(public_config::get_public_config),
        );

    // Admin routes (require the admin key)
    let admin_routes = Router::new()
        .route("/api/v1/admin/clinics/:id", put(clinics::update_clinic))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_key,
        ));

    // Probes and metrics (no authentication required)
    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(site_routes)
        .merge(global_routes)
        .merge(admin_routes)
        .merge(ops_routes)
        .fallback(not_found)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

/// JSON not-found body for unmatched paths.
async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
