//! Tenant site aggregate and load errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Clinic, Faq, Testimonial};

/// Everything one tenant page render needs: the clinic record plus its
/// dependent collections.
///
/// Collections may be empty either because the tenant has no rows or
/// because a dependent fetch failed and was degraded; callers cannot and
/// should not distinguish the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteData {
    pub clinic: Clinic,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
}

/// Errors from the site loading sequence.
///
/// Only clinic resolution is fatal; dependent-collection failures are
/// absorbed before this type is ever constructed.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("clinic not found")]
    ClinicNotFound,

    #[error("site query failed: {0}")]
    Query(#[from] sqlx::Error),
}
