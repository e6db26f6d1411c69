//! Business logic services.

pub mod resolver;
pub mod site;
pub mod site_loader;
pub mod theme;
pub mod view_model;
pub mod working_hours;

pub use site::{load_site, SiteSource};
pub use site_loader::{LoadState, SiteLoader};
pub use theme::{Theme, ThemeContext};
pub use view_model::{resolve_site_content, SiteContent};
pub use working_hours::{parse_working_hours, WeeklySchedule};
