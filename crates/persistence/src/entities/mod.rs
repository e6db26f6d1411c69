//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod appointment;
pub mod clinic;
pub mod faq;
pub mod testimonial;

pub use appointment::AppointmentEntity;
pub use clinic::ClinicEntity;
pub use faq::FaqEntity;
pub use testimonial::TestimonialEntity;
