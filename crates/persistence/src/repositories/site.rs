//! PostgreSQL-backed site data source.

use async_trait::async_trait;
use domain::models::{Clinic, Faq, Testimonial};
use domain::services::SiteSource;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ClinicRepository, FaqRepository, TestimonialRepository};

/// [`SiteSource`] implementation over the clinic, testimonial, and FAQ
/// repositories.
#[derive(Clone)]
pub struct PgSiteSource {
    clinics: ClinicRepository,
    testimonials: TestimonialRepository,
    faqs: FaqRepository,
}

impl PgSiteSource {
    pub fn new(pool: PgPool) -> Self {
        Self {
            clinics: ClinicRepository::new(pool.clone()),
            testimonials: TestimonialRepository::new(pool.clone()),
            faqs: FaqRepository::new(pool),
        }
    }
}

#[async_trait]
impl SiteSource for PgSiteSource {
    async fn clinic_by_slug(&self, slug: &str) -> Result<Option<Clinic>, sqlx::Error> {
        self.clinics.find_by_slug(slug).await
    }

    async fn default_clinic(&self) -> Result<Option<Clinic>, sqlx::Error> {
        self.clinics.find_default().await
    }

    async fn testimonials_for_clinic(
        &self,
        clinic_id: Uuid,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        self.testimonials.list_for_clinic(clinic_id).await
    }

    async fn active_faqs_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<Faq>, sqlx::Error> {
        self.faqs.list_active_for_clinic(clinic_id).await
    }
}
