pub mod repository;
pub mod schema;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::CourseBundle;

pub use repository::SqliteCourseStore;

/// Read access to stored courses and their related rows.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Every stored course, in the store's natural order.
    async fn fetch_course_bundles(&self) -> Result<Vec<CourseBundle>, AppError>;
}
