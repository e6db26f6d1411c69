//! Testimonial repository for database operations.

use domain::models::Testimonial;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TestimonialEntity;
use crate::metrics::QueryTimer;

/// Repository for testimonial database operations.
#[derive(Clone)]
pub struct TestimonialRepository {
    pool: PgPool,
}

impl TestimonialRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All testimonials for a clinic, ascending by display order.
    pub async fn list_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<Testimonial>, sqlx::Error> {
        let timer = QueryTimer::new("list_testimonials_for_clinic");
        let entities = sqlx::query_as::<_, TestimonialEntity>(
            r#"
            SELECT id, clinic_id, patient_name, review, rating, image_url, is_featured, display_order
            FROM testimonials
            WHERE clinic_id = $1
            ORDER BY display_order ASC
            "#,
        )
        .bind(clinic_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(entities?.into_iter().map(Into::into).collect())
    }
}
