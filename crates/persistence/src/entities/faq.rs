//! FAQ entity (database row mapping).

use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the faqs table.
#[derive(Debug, Clone, FromRow)]
pub struct FaqEntity {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
    pub is_active: bool,
}

impl From<FaqEntity> for domain::models::Faq {
    fn from(entity: FaqEntity) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            question: entity.question,
            answer: entity.answer,
            display_order: entity.display_order,
            is_active: entity.is_active,
        }
    }
}
