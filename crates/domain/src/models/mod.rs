//! Domain models for Clinic Sites.

pub mod appointment;
pub mod clinic;
pub mod faq;
pub mod site;
pub mod testimonial;

pub use appointment::{Appointment, CreateAppointmentRequest};
pub use clinic::{Clinic, UpdateClinicRequest};
pub use faq::Faq;
pub use site::{SiteData, SiteError};
pub use testimonial::Testimonial;
