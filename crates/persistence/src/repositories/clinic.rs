//! Clinic repository for database operations.

use domain::models::{Clinic, UpdateClinicRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ClinicEntity;
use crate::metrics::QueryTimer;

const CLINIC_COLUMNS: &str = "id, slug, business_name, address, phone, place_url, about_text, \
                              working_hours, services_list, created_at, updated_at";

/// Repository for clinic database operations.
#[derive(Clone)]
pub struct ClinicRepository {
    pool: PgPool,
}

impl ClinicRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the clinic whose slug equals the input.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Clinic>, sqlx::Error> {
        let timer = QueryTimer::new("find_clinic_by_slug");
        let entity = sqlx::query_as::<_, ClinicEntity>(&format!(
            "SELECT {CLINIC_COLUMNS} FROM clinics WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(entity?.map(Into::into))
    }

    /// Find clinic by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Clinic>, sqlx::Error> {
        let timer = QueryTimer::new("find_clinic_by_id");
        let entity = sqlx::query_as::<_, ClinicEntity>(&format!(
            "SELECT {CLINIC_COLUMNS} FROM clinics WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(entity?.map(Into::into))
    }

    /// The clinic served when no slug is present: alphabetically first by
    /// business name.
    pub async fn find_default(&self) -> Result<Option<Clinic>, sqlx::Error> {
        let timer = QueryTimer::new("find_default_clinic");
        let entity = sqlx::query_as::<_, ClinicEntity>(&format!(
            "SELECT {CLINIC_COLUMNS} FROM clinics ORDER BY business_name ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(entity?.map(Into::into))
    }

    /// Partial update of a clinic's descriptive fields. Unset request
    /// fields keep their current values; slug and id never change.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateClinicRequest,
    ) -> Result<Option<Clinic>, sqlx::Error> {
        let timer = QueryTimer::new("update_clinic");
        let entity = sqlx::query_as::<_, ClinicEntity>(&format!(
            r#"
            UPDATE clinics
            SET
                business_name = COALESCE($2, business_name),
                address = COALESCE($3, address),
                phone = COALESCE($4, phone),
                place_url = COALESCE($5, place_url),
                about_text = COALESCE($6, about_text),
                working_hours = COALESCE($7, working_hours),
                services_list = COALESCE($8, services_list),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {CLINIC_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(request.business_name.as_deref())
        .bind(request.address.as_deref())
        .bind(request.phone.as_deref())
        .bind(request.place_url.as_deref())
        .bind(request.about_text.as_deref())
        .bind(request.working_hours.as_deref())
        .bind(request.services_list.as_deref())
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(entity?.map(Into::into))
    }
}
