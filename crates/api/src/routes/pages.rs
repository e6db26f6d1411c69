//! Global informational pages.
//!
//! Content for the non-tenant paths (privacy, terms, features, and so
//! on). The registry serves exactly the page names the tenant resolver
//! reserves, so a page can never shadow a clinic slug or vice versa.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::error::ApiError;

/// One static page.
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PAGES: &[StaticPage] = &[
    StaticPage {
        slug: "about",
        title: "About Us",
        body: "We build and host marketing websites for dental practices, so clinics can focus \
               on patients instead of pixels. Every site ships with online booking, reviews, \
               and an FAQ section out of the box.",
    },
    StaticPage {
        slug: "blog",
        title: "Blog",
        body: "Product updates, practice-growth tips, and stories from clinics on the platform.",
    },
    StaticPage {
        slug: "brand",
        title: "Brand",
        body: "Logos, colors, and usage guidelines for presenting the platform in your own \
               materials.",
    },
    StaticPage {
        slug: "changelog",
        title: "Changelog",
        body: "Release notes for the platform. New sections, booking improvements, and fixes \
               land here first.",
    },
    StaticPage {
        slug: "faqs",
        title: "Frequently Asked Questions",
        body: "Answers about plans, onboarding, custom domains, and moving an existing practice \
               website onto the platform.",
    },
    StaticPage {
        slug: "features",
        title: "Features",
        body: "Tenant-branded sites, appointment intake, patient testimonials, FAQ management, \
               office-hours display, and light/dark themes.",
    },
    StaticPage {
        slug: "help",
        title: "Help Center",
        body: "Guides for editing your clinic profile, managing testimonials and FAQs, and \
               reviewing appointment requests.",
    },
    StaticPage {
        slug: "pricing",
        title: "Pricing",
        body: "Simple per-clinic pricing with no setup fee. Every plan includes hosting, the \
               booking form, and unlimited content updates.",
    },
    StaticPage {
        slug: "privacy",
        title: "Privacy Policy",
        body: "We collect only what the booking form asks for and share it only with the clinic \
               you booked with. Appointment details are never sold or used for advertising.",
    },
    StaticPage {
        slug: "terms",
        title: "Terms of Service",
        body: "The platform is provided to clinics under a subscription agreement. Visitors \
               submitting a booking request agree to be contacted by the clinic to confirm.",
    },
    StaticPage {
        slug: "testimonials",
        title: "Testimonials",
        body: "What practices on the platform say about switching their website to us.",
    },
];

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub slug: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PageContent {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// GET /api/v1/pages
pub async fn list_pages() -> Json<Vec<PageSummary>> {
    Json(
        PAGES
            .iter()
            .map(|page| PageSummary {
                slug: page.slug,
                title: page.title,
            })
            .collect(),
    )
}

/// GET /api/v1/pages/:page
pub async fn get_page(Path(page): Path<String>) -> Result<Json<PageContent>, ApiError> {
    PAGES
        .iter()
        .find(|p| p.slug == page)
        .map(|p| {
            Json(PageContent {
                slug: p.slug,
                title: p.title,
                body: p.body,
            })
        })
        .ok_or_else(|| ApiError::NotFound("Page not found".into()))
}
