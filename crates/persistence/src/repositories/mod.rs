//! Repository implementations for database operations.

pub mod appointment;
pub mod clinic;
pub mod faq;
pub mod site;
pub mod testimonial;

pub use appointment::AppointmentRepository;
pub use clinic::ClinicRepository;
pub use faq::FaqRepository;
pub use site::PgSiteSource;
pub use testimonial::TestimonialRepository;
