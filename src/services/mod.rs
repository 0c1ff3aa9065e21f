pub mod course_projector;

pub use course_projector::{fetch_public_courses, project_course};
