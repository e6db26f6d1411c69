//! Tenant resolution from front-end URL paths.
//!
//! The first path segment names the tenant slug, except for the bare root
//! and the global informational pages, which live outside the slug
//! namespace. Resolution is a pure function of the path; the absence of a
//! slug is a valid state, not an error.

/// Global page names reserved outside the tenant slug namespace.
///
/// This list is the single source of truth: the page registry serves
/// exactly these, and the resolver never treats them as slugs.
pub const RESERVED_PAGES: &[&str] = &[
    "about",
    "blog",
    "brand",
    "changelog",
    "faqs",
    "features",
    "help",
    "pricing",
    "privacy",
    "terms",
    "testimonials",
];

/// Path prefixes that belong to the service itself, never to a tenant.
const SERVICE_PREFIXES: &[&str] = &["api", "metrics"];

/// Extracts the tenant slug from a front-end URL path.
///
/// Returns `None` for the bare root, reserved global pages, and service
/// paths. The slug is taken as-is; the backend matches it by equality.
pub fn slug_from_path(path: &str) -> Option<String> {
    let first = path.trim_start_matches('/').split('/').next()?;
    if first.is_empty() {
        return None;
    }
    if RESERVED_PAGES.contains(&first) || SERVICE_PREFIXES.contains(&first) {
        return None;
    }
    Some(first.to_string())
}
