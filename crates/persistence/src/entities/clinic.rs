//! Clinic entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the clinics table.
#[derive(Debug, Clone, FromRow)]
pub struct ClinicEntity {
    pub id: Uuid,
    pub slug: String,
    pub business_name: String,
    pub address: String,
    pub phone: String,
    pub place_url: Option<String>,
    pub about_text: Option<String>,
    pub working_hours: Option<String>,
    pub services_list: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClinicEntity> for domain::models::Clinic {
    fn from(entity: ClinicEntity) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            business_name: entity.business_name,
            address: entity.address,
            phone: entity.phone,
            place_url: entity.place_url,
            about_text: entity.about_text,
            working_hours: entity.working_hours,
            services_list: entity.services_list,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
