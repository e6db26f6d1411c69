//! Tenant site API routes.
//!
//! Serves the raw site aggregate (clinic + dependent collections) and the
//! fully-resolved content view-model. The bare `/sites` and `/content`
//! routes serve the default tenant used when no slug is present.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use domain::services::{load_site, resolve_site_content, resolver};
use persistence::repositories::PgSiteSource;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for path-based resolution.
#[derive(Debug, Deserialize)]
pub struct ByPathQuery {
    pub path: String,
}

/// GET /api/v1/sites/:slug
///
/// Site data for one tenant.
pub async fn get_site(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let source = PgSiteSource::new(state.pool.clone());
    let data = load_site(&source, Some(&slug)).await?;

    info!(
        slug = %data.clinic.slug,
        testimonials = data.testimonials.len(),
        faqs = data.faqs.len(),
        "Loaded tenant site"
    );

    Ok(Json(data))
}

/// GET /api/v1/sites
///
/// Site data for the default tenant (alphabetically first by business
/// name), served when the front end has no slug.
pub async fn get_default_site(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let source = PgSiteSource::new(state.pool.clone());
    let data = load_site(&source, None).await?;

    info!(slug = %data.clinic.slug, "Loaded default tenant site");

    Ok(Json(data))
}

/// GET /api/v1/sites/by-path?path=/bright-smiles/contact
///
/// Resolves a front-end URL path to a tenant, then serves its site data.
/// Reserved global paths and the bare root resolve to the default tenant.
pub async fn get_site_by_path(
    State(state): State<AppState>,
    Query(query): Query<ByPathQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let slug = resolver::slug_from_path(&query.path);
    let source = PgSiteSource::new(state.pool.clone());
    let data = load_site(&source, slug.as_deref()).await?;

    info!(path = %query.path, slug = %data.clinic.slug, "Resolved site by path");

    Ok(Json(data))
}

/// GET /api/v1/content/:slug
///
/// The fully-resolved view-model for one tenant: every display field
/// populated, defaults filled in per field.
pub async fn get_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let source = PgSiteSource::new(state.pool.clone());
    let data = load_site(&source, Some(&slug)).await?;
    let content = resolve_site_content(Some(&data.clinic), &data.testimonials, &data.faqs);

    Ok(Json(content))
}

/// GET /api/v1/content
///
/// The resolved view-model for the default tenant.
pub async fn get_default_content(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let source = PgSiteSource::new(state.pool.clone());
    let data = load_site(&source, None).await?;
    let content = resolve_site_content(Some(&data.clinic), &data.testimonials, &data.faqs);

    Ok(Json(content))
}
