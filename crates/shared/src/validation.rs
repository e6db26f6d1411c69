//! Common validation utilities.

use validator::ValidationError;

/// Maximum accepted phone number length.
const MAX_PHONE_LENGTH: usize = 32;

/// Maximum accepted slug length.
const MAX_SLUG_LENGTH: usize = 64;

/// Validates a phone number string.
///
/// Accepts digits plus common separators and an optional leading `+`.
/// Intentionally loose: clinic records store phone numbers as display text.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() || phone.len() > MAX_PHONE_LENGTH {
        let mut err = ValidationError::new("phone_length");
        err.message = Some("Phone number must be 1-32 characters".into());
        return Err(err);
    }

    let valid = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-' | '.' | '+' | '/'));
    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_charset");
        err.message = Some("Phone number contains invalid characters".into());
        Err(err)
    }
}

/// Validates a tenant slug: lowercase ASCII letters, digits, and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        let mut err = ValidationError::new("slug_length");
        err.message = Some("Slug must be 1-64 characters".into());
        return Err(err);
    }

    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid && !slug.starts_with('-') && !slug.ends_with('-') {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_format");
        err.message = Some("Slug must contain only lowercase letters, digits, and hyphens".into());
        Err(err)
    }
}
