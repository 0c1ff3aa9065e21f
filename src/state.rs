use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::CourseStore;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub courses: Arc<dyn CourseStore>,
}
