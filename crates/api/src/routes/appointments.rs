//! Appointment submission routes.
//!
//! The booking form posts here. The slug must resolve to a clinic before
//! any write happens; an unresolved tenant fails fast without touching
//! the appointments table.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use domain::models::{Appointment, CreateAppointmentRequest};
use persistence::repositories::{AppointmentRepository, ClinicRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_appointment_submitted;

#[derive(Debug, Serialize)]
pub struct SubmitAppointmentResponse {
    pub appointment: Appointment,
}

/// POST /api/v1/sites/:slug/appointments
///
/// Persists one booking submission for the resolved clinic.
pub async fn submit_appointment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let clinics = ClinicRepository::new(state.pool.clone());
    let clinic = match clinics.find_by_slug(&slug).await? {
        Some(clinic) => clinic,
        None => {
            warn!(slug = %slug, "Appointment submission for unknown clinic");
            return Err(ApiError::NotFound("Clinic not found".into()));
        }
    };

    let repo = AppointmentRepository::new(state.pool.clone());
    let appointment = repo.create(clinic.id, &request).await?;

    record_appointment_submitted(&clinic.slug);
    info!(
        clinic_id = %clinic.id,
        appointment_id = %appointment.id,
        "Appointment request submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitAppointmentResponse { appointment }),
    ))
}
