//! Appointment repository for database operations.
//!
//! Appointments are an append-only intake queue: this repository only
//! inserts. There is no duplicate suppression; two identical submissions
//! produce two rows.

use domain::models::{Appointment, CreateAppointmentRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AppointmentEntity;
use crate::metrics::QueryTimer;

/// Repository for appointment database operations.
#[derive(Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one booking submission for a clinic.
    pub async fn create(
        &self,
        clinic_id: Uuid,
        request: &CreateAppointmentRequest,
    ) -> Result<Appointment, sqlx::Error> {
        let timer = QueryTimer::new("create_appointment");
        let entity = sqlx::query_as::<_, AppointmentEntity>(
            r#"
            INSERT INTO appointments (clinic_id, name, phone, email, message, preferred_time, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, clinic_id, name, phone, email, message, preferred_time, status, created_at
            "#,
        )
        .bind(clinic_id)
        .bind(&request.name)
        .bind(&request.phone)
        .bind(request.email.as_deref())
        .bind(request.message.as_deref())
        .bind(request.preferred_time.as_deref())
        .bind(request.status.as_deref())
        .fetch_one(&self.pool)
        .await;
        timer.record();

        Ok(entity?.into())
    }
}
