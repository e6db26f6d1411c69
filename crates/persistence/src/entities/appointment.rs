//! Appointment entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the appointments table.
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentEntity {
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

impl From<AppointmentEntity> for domain::models::Appointment {
    fn from(entity: AppointmentEntity) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
            message: entity.message,
            preferred_time: entity.preferred_time,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}
