//! Clinic admin API routes.
//!
//! Clinic records are created and managed out-of-band; the service only
//! exposes a partial update used by the admin affordance. These routes
//! require the admin key.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use domain::models::{Clinic, UpdateClinicRequest};
use persistence::repositories::ClinicRepository;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct UpdateClinicResponse {
    pub clinic: Clinic,
}

/// PUT /api/v1/admin/clinics/:id
///
/// Applies a partial update to a clinic's descriptive fields.
pub async fn update_clinic(
    State(state): State<AppState>,
    Path(clinic_id): Path<Uuid>,
    Json(request): Json<UpdateClinicRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    if request.is_empty() {
        return Err(ApiError::Validation("No fields to update".into()));
    }

    let repo = ClinicRepository::new(state.pool.clone());
    match repo.update(clinic_id, &request).await? {
        Some(clinic) => {
            info!(clinic_id = %clinic_id, slug = %clinic.slug, "Updated clinic");
            Ok(Json(UpdateClinicResponse { clinic }))
        }
        None => {
            warn!(clinic_id = %clinic_id, "Update for unknown clinic");
            Err(ApiError::NotFound("Clinic not found".into()))
        }
    }
}
