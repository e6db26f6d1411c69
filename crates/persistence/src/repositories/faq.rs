//! FAQ repository for database operations.

use domain::models::Faq;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::FaqEntity;
use crate::metrics::QueryTimer;

/// Repository for FAQ database operations.
#[derive(Clone)]
pub struct FaqRepository {
    pool: PgPool,
}

impl FaqRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active FAQs for a clinic, ascending by display order. Inactive
    /// rows are never surfaced to the website.
    pub async fn list_active_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<Faq>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_faqs_for_clinic");
        let entities = sqlx::query_as::<_, FaqEntity>(
            r#"
            SELECT id, clinic_id, question, answer, display_order, is_active
            FROM faqs
            WHERE clinic_id = $1 AND is_active = true
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
