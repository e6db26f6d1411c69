//! Site content view-model.
//!
//! Presentational sections render from a fully-populated record rather
//! than reaching into optional clinic fields one by one. Every display
//! field is resolved here exactly once: the tenant's value when present,
//! otherwise a fixed default. Resolution is per-field, so a clinic with a
//! business name but no about text shows its real name alongside the
//! stock about copy.

use serde::{Deserialize, Serialize};

use crate::models::{Clinic, Faq, Testimonial};

use super::working_hours::{parse_working_hours, WeeklySchedule};

pub const DEFAULT_HERO_TITLE: &str = "Your Perfect Smile";
pub const DEFAULT_DISPLAY_NAME: &str = "Our Practice";
pub const DEFAULT_ADDRESS: &str = "123 Main Street, City, State 12345";
pub const DEFAULT_PHONE: &str = "(555) 123-4567";
pub const DEFAULT_ABOUT_TEXT: &str = "With over 15 years of experience, our team of certified \
dentists provides exceptional care using the latest technology and techniques.";

pub const DEFAULT_SERVICES: &[&str] = &[
    "General Dentistry",
    "Teeth Cleaning",
    "Dental Fillings",
    "Root Canal Treatment",
    "Dental Crowns",
    "Teeth Whitening",
];

/// One rendered testimonial. Defaults carry no database identity, so the
/// card is presentation-shaped rather than a [`Testimonial`] row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TestimonialCard {
    pub patient_name: String,
    pub review: String,
    pub rating: i32,
}

/// One rendered question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// One line of the office-hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OfficeHoursLine {
    pub label: String,
    pub hours: String,
}

/// The fully-resolved content for one tenant site. No field is optional
/// except `place_url`, which the original layout omits entirely when the
/// clinic has no map link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteContent {
    pub slug: Option<String>,
    pub hero_title: String,
    pub display_name: String,
    pub about_text: String,
    pub address: String,
    pub phone: String,
    pub emergency_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_url: Option<String>,
    pub services: Vec<String>,
    pub office_hours: Vec<OfficeHoursLine>,
    pub testimonials: Vec<TestimonialCard>,
    pub faqs: Vec<FaqItem>,
}

/// Builds the view-model from whatever tenant data loaded.
pub fn resolve_site_content(
    clinic: Option<&Clinic>,
    testimonials: &[Testimonial],
    faqs: &[Faq],
) -> SiteContent {
    let business_name = clinic.and_then(|c| non_empty(&c.business_name));
    let phone = clinic
        .and_then(|c| non_empty(&c.phone))
        .unwrap_or_else(|| DEFAULT_PHONE.to_string());

    SiteContent {
        slug: clinic.map(|c| c.slug.clone()),
        hero_title: business_name
            .clone()
            .unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string()),
        display_name: business_name.unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
        about_text: clinic
            .and_then(|c| c.about_text.as_deref())
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ABOUT_TEXT.to_string()),
        address: clinic
            .and_then(|c| non_empty(&c.address))
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
        emergency_line: format!("24/7 Emergency Line: {}", phone),
        phone,
        place_url: clinic
            .and_then(|c| c.place_url.as_deref())
            .and_then(non_empty),
        services: resolve_services(clinic),
        office_hours: resolve_office_hours(clinic),
        testimonials: resolve_testimonials(testimonials),
        faqs: resolve_faqs(faqs),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn resolve_services(clinic: Option<&Clinic>) -> Vec<String> {
    match clinic.and_then(|c| c.services_list.as_ref()) {
        Some(list) if !list.is_empty() => list.clone(),
        _ => DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
    }
}

fn resolve_office_hours(clinic: Option<&Clinic>) -> Vec<OfficeHoursLine> {
    if let Some(text) = clinic.and_then(|c| c.working_hours.as_deref()) {
        if let WeeklySchedule::Structured(entries) = parse_working_hours(text) {
            return entries
                .into_iter()
                .map(|entry| OfficeHoursLine {
                    label: entry.weekday.to_string(),
                    hours: entry.hours,
                })
                .collect();
        }
    }
    default_office_hours()
}

/// The fixed schedule shown when working-hours text is missing or
/// unstructured.
pub fn default_office_hours() -> Vec<OfficeHoursLine> {
    vec![
        OfficeHoursLine {
            label: "Monday - Friday".to_string(),
            hours: "8:00 AM - 6:00 PM".to_string(),
        },
        OfficeHoursLine {
            label: "Saturday".to_string(),
            hours: "9:00 AM - 4:00 PM".to_string(),
        },
        OfficeHoursLine {
            label: "Sunday".to_string(),
            hours: "Emergency Only".to_string(),
        },
    ]
}

fn resolve_testimonials(testimonials: &[Testimonial]) -> Vec<TestimonialCard> {
    if testimonials.is_empty() {
        return default_testimonials();
    }
    testimonials
        .iter()
        .map(|t| TestimonialCard {
            patient_name: t.patient_name.clone(),
            review: t.review.clone(),
            rating: t.rating,
        })
        .collect()
}

/// The three stock testimonials shown for tenants with none of their own.
pub fn default_testimonials() -> Vec<TestimonialCard> {
    vec![
        TestimonialCard {
            patient_name: "Sarah Johnson".to_string(),
            review: "Dr. Smith and the team provided exceptional care. My smile has never \
                     looked better!"
                .to_string(),
            rating: 5,
        },
        TestimonialCard {
            patient_name: "Michael Chen".to_string(),
            review: "Professional, caring, and pain-free experience. Highly recommend this \
                     clinic."
                .to_string(),
            rating: 5,
        },
        TestimonialCard {
            patient_name: "Emily Davis".to_string(),
            review: "The best dental experience I've ever had. The staff is amazing and very \
                     gentle."
                .to_string(),
            rating: 5,
        },
    ]
}

fn resolve_faqs(faqs: &[Faq]) -> Vec<FaqItem> {
    if faqs.is_empty() {
        return default_faqs();
    }
    faqs.iter()
        .map(|f| FaqItem {
            question: f.question.clone(),
            answer: f.answer.clone(),
        })
        .collect()
}

/// The five stock questions shown for tenants with no active FAQs.
pub fn default_faqs() -> Vec<FaqItem> {
    vec![
        FaqItem {
            question: "What services do you offer?".to_string(),
            answer: "We offer a full range of dental services, including checkups, cleanings, \
                     fillings, root canals, whitening, and more."
                .to_string(),
        },
        FaqItem {
            question: "Do you accept insurance?".to_string(),
            answer: "Yes, we accept most major dental insurance plans. Please contact us for \
                     details."
                .to_string(),
        },
        FaqItem {
            question: "How do I book an appointment?".to_string(),
            answer: "You can book an appointment by calling our office or using our online \
                     booking form."
                .to_string(),
        },
        FaqItem {
            question: "What should I expect at my first visit?".to_string(),
            answer: "Your first visit includes a comprehensive exam, any needed X-rays, and a \
                     conversation about your goals and treatment options."
                .to_string(),
        },
        FaqItem {
            question: "What if I have a dental emergency?".to_string(),
            answer: "Call our office right away. We keep same-day slots for urgent care and \
                     provide an emergency line outside office hours."
                .to_string(),
        },
    ]
}
