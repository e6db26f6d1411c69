//! Domain layer for the Clinic Sites backend.
//!
//! This crate contains:
//! - Domain models (Clinic, Testimonial, Faq, Appointment, SiteData)
//! - Business logic services (tenant resolution, site loading,
//!   working-hours parsing, view-model construction, theme preference)

pub mod models;
pub mod services;
