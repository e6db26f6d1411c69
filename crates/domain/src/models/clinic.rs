//! Clinic (tenant) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One dental practice served by the platform.
///
/// The slug is the tenant key: unique across all clinics, matched by
/// equality against the URL path segment. Descriptive fields are free
/// text maintained out-of-band; `working_hours` in particular is a
/// semi-structured string that is parsed only at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Clinic {
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

/// Partial update applied through the admin affordance.
///
/// Slug and id are immutable; every other descriptive field may be
/// replaced independently.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClinicRequest {
    #[validate(length(min = 1, max = 200, message = "Business name must be 1-200 characters"))]
    pub business_name: Option<String>,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: Option<String>,

    pub place_url: Option<String>,
    pub about_text: Option<String>,
    pub working_hours: Option<String>,
    pub services_list: Option<Vec<String>>,
}

impl UpdateClinicRequest {
    /// True when no field is set; such an update would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.business_name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.place_url.is_none()
            && self.about_text.is_none()
            && self.working_hours.is_none()
            && self.services_list.is_none()
    }
}
