//! Testimonial entity (database row mapping).

use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the testimonials table.
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialEntity {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub patient_name: String,
    pub review: String,
    pub rating: i32,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
}

impl From<TestimonialEntity> for domain::models::Testimonial {
    fn from(entity: TestimonialEntity) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            patient_name: entity.patient_name,
            review: entity.review,
            rating: entity.rating,
            image_url: entity.image_url,
            is_featured: entity.is_featured,
            display_order: entity.display_order,
        }
    }
}
