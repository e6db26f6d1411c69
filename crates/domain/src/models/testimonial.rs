//! Testimonial domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A patient review attached to one clinic.
///
/// Ratings are stored as given (expected 1-5 but not enforced); listing
/// order is ascending `display_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Testimonial {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub patient_name: String,
    pub review: String,
    pub rating: i32,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
}
