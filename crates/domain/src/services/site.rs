//! Tenant site loading.
//!
//! One load resolves the clinic first, then fetches its dependent
//! collections concurrently. Clinic resolution failing is fatal for the
//! load; a dependent collection failing degrades that collection to empty
//! and the load still succeeds.

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::models::{Clinic, Faq, SiteData, SiteError, Testimonial};

/// Read-side data source for tenant sites.
///
/// Implemented by the persistence layer; tests substitute an in-memory
/// fake.
#[async_trait]
pub trait SiteSource: Send + Sync {
    /// The clinic whose slug equals the input, if any.
    async fn clinic_by_slug(&self, slug: &str) -> Result<Option<Clinic>, sqlx::Error>;

    /// The fallback clinic used when no slug is present: alphabetically
    /// first by business name.
    async fn default_clinic(&self) -> Result<Option<Clinic>, sqlx::Error>;

    /// All testimonials for a clinic, ascending by display order.
    async fn testimonials_for_clinic(
        &self,
        clinic_id: Uuid,
    ) -> Result<Vec<Testimonial>, sqlx::Error>;

    /// Active FAQs for a clinic, ascending by display order.
    async fn active_faqs_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<Faq>, sqlx::Error>;
}

/// Loads everything a tenant page needs.
///
/// With a slug the clinic is matched by equality; without one the
/// alphabetically-first clinic is served instead of an error. If no
/// clinic resolves, the dependent collections are never queried.
pub async fn load_site<S: SiteSource + ?Sized>(
    source: &S,
    slug: Option<&str>,
) -> Result<SiteData, SiteError> {
    let clinic = match slug {
        Some(slug) => source.clinic_by_slug(slug).await?,
        None => source.default_clinic().await?,
    };

    let Some(clinic) = clinic else {
        return Err(SiteError::ClinicNotFound);
    };

    let (testimonials, faqs) = tokio::join!(
        source.testimonials_for_clinic(clinic.id),
        source.active_faqs_for_clinic(clinic.id),
    );

    let testimonials = testimonials.unwrap_or_else(|err| {
        warn!(clinic_id = %clinic.id, error = %err, "Failed to fetch testimonials, degrading to empty");
        Vec::new()
    });
    let faqs = faqs.unwrap_or_else(|err| {
        warn!(clinic_id = %clinic.id, error = %err, "Failed to fetch FAQs, degrading to empty");
        Vec::new()
    });

    Ok(SiteData {
        clinic,
        testimonials,
        faqs,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[tokio::test]
    async fn test_load_by_slug_yields_matching_clinic() {
        let source = FakeSource::with_clinics(vec![
            clinic("bright-smiles", "Bright Smiles Dental"),
            clinic("pearl-dental", "Pearl Dental"),
        ]);

        let data = load_site(&source, Some("pearl-dental")).await.unwrap();
        assert_eq!(data.clinic.slug, "pearl-dental");
    }

    #[tokio::test]
    async fn test_load_without_slug_falls_back_to_first_by_name() {
        let source = FakeSource::with_clinics(vec![
            clinic("zenith", "Zenith Dental"),
            clinic("apex", "Apex Dental Care"),
        ]);

        let data = load_site(&source, None).await.unwrap();
        assert_eq!(data.clinic.slug, "apex");
    }

    #[tokio::test]
    async fn test_unknown_slug_short_circuits_dependent_fetches() {
        let source =
            FakeSource::with_clinics(vec![clinic("bright-smiles", "Bright Smiles Dental")]);

        let result = load_site(&source, Some("no-such-clinic")).await;
        assert!(matches!(result, Err(SiteError::ClinicNotFound)));
        assert_eq!(source.collection_call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_clinics_without_slug_is_not_found() {
        let source = FakeSource::default();
        let result = load_site(&source, None).await;
        assert!(matches!(result, Err(SiteError::ClinicNotFound)));
    }

    #[tokio::test]
    async fn test_collections_are_scoped_and_ordered() {
        let mut source = FakeSource::with_clinics(vec![
            clinic("bright-smiles", "Bright Smiles Dental"),
            clinic("pearl-dental", "Pearl Dental"),
        ]);
        let id = source.clinics[0].id;
        let other = source.clinics[1].id;
        source.testimonials = std::sync::Mutex::new(vec![
            testimonial(id, "Second", 2),
            testimonial(id, "First", 1),
            testimonial(other, "Elsewhere", 1),
        ]);
        source.faqs = std::sync::Mutex::new(vec![faq(id, "Do you accept insurance?", 1)]);

        let data = load_site(&source, Some("bright-smiles")).await.unwrap();
        assert_eq!(data.testimonials.len(), 2);
        assert_eq!(data.testimonials[0].patient_name, "First");
        assert_eq!(data.testimonials[1].patient_name, "Second");
        assert_eq!(data.faqs.len(), 1);
    }

    #[tokio::test]
    async fn test_testimonial_failure_degrades_to_empty() {
        let mut source =
            FakeSource::with_clinics(vec![clinic("bright-smiles", "Bright Smiles Dental")]);
        let id = source.clinics[0].id;
        source.faqs = std::sync::Mutex::new(vec![faq(id, "Do you accept insurance?", 1)]);
        source.fail_testimonials = true;

        let data = load_site(&source, Some("bright-smiles")).await.unwrap();
        assert!(data.testimonials.is_empty());
        assert_eq!(data.faqs.len(), 1);
    }

    #[tokio::test]
    async fn test_faq_failure_degrades_to_empty() {
        let mut source =
            FakeSource::with_clinics(vec![clinic("bright-smiles", "Bright Smiles Dental")]);
        let id = source.clinics[0].id;
        source.testimonials = std::sync::Mutex::new(vec![testimonial(id, "Jane", 1)]);
        source.fail_faqs = true;

        let data = load_site(&source, Some("bright-smiles")).await.unwrap();
        assert_eq!(data.testimonials.len(), 1);
        assert!(data.faqs.is_empty());
    }

    #[tokio::test]
    async fn test_both_collection_failures_still_succeed() {
        let mut source =
            FakeSource::with_clinics(vec![clinic("bright-smiles", "Bright Smiles Dental")]);
        source.fail_testimonials = true;
        source.fail_faqs = true;

        let data = load_site(&source, Some("bright-smiles")).await.unwrap();
        assert_eq!(data.clinic.slug, "bright-smiles");
        assert!(data.testimonials.is_empty());
        assert!(data.faqs.is_empty());
    }
}
