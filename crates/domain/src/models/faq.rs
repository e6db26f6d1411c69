//! FAQ domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question/answer pair attached to one clinic.
///
/// Only active rows are surfaced to the website; listing order is
/// ascending `display_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Faq {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
    pub is_active: bool,
}
