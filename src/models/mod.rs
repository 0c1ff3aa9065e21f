pub mod attachment;
pub mod course;
pub mod organization;

pub use attachment::{Badge, FaqEntry, ImageRef};
pub use course::{CourseBundle, CourseListing, CourseRecord};
pub use organization::OrganizationSummary;
