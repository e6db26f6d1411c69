//! Appointment (booking submission) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One booking submission from an anonymous website visitor.
///
/// Appointments form an append-only intake queue consumed by back-office
/// tooling; this service never updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Appointment {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub message: Option<String>,
    pub preferred_time: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking form payload.
///
/// Only presence of name and phone is enforced here; the remaining fields
/// are free text passed through as submitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 64, message = "Phone is required"))]
    pub phone: String,

    pub email: Option<String>,
    pub message: Option<String>,
    pub preferred_time: Option<String>,
    pub status: Option<String>,
}
