use std::collections::HashMap;
use std::sync::LazyLock;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::db::CourseStore;
use crate::db::schema::{BADGES, COURSES, FAQS, IMAGES, ORGANIZATIONS};
use crate::error::AppError;
use crate::models::{Badge, CourseBundle, CourseRecord, FaqEntry, ImageRef, OrganizationSummary};

static COURSES_SQL: LazyLock<String> = LazyLock::new(|| COURSES.select_sql());
static ORGANIZATIONS_SQL: LazyLock<String> = LazyLock::new(|| ORGANIZATIONS.select_sql());
static IMAGES_SQL: LazyLock<String> = LazyLock::new(|| IMAGES.select_sql());
static BADGES_SQL: LazyLock<String> = LazyLock::new(|| BADGES.select_sql());
static FAQS_SQL: LazyLock<String> = LazyLock::new(|| FAQS.select_sql());

pub async fn fetch_courses(db: &SqlitePool) -> Result<Vec<CourseRecord>, sqlx::Error> {
    sqlx::query_as::<_, CourseRecord>(COURSES_SQL.as_str())
        .fetch_all(db)
        .await
}

pub async fn fetch_organizations(
    db: &SqlitePool,
) -> Result<Vec<OrganizationSummary>, sqlx::Error> {
    sqlx::query_as::<_, OrganizationSummary>(ORGANIZATIONS_SQL.as_str())
        .fetch_all(db)
        .await
}

pub async fn fetch_images(db: &SqlitePool) -> Result<Vec<ImageRef>, sqlx::Error> {
    sqlx::query_as::<_, ImageRef>(IMAGES_SQL.as_str())
        .fetch_all(db)
        .await
}

pub async fn fetch_badges(db: &SqlitePool) -> Result<Vec<Badge>, sqlx::Error> {
    sqlx::query_as::<_, Badge>(BADGES_SQL.as_str())
        .fetch_all(db)
        .await
}

pub async fn fetch_faqs(db: &SqlitePool) -> Result<Vec<FaqEntry>, sqlx::Error> {
    sqlx::query_as::<_, FaqEntry>(FAQS_SQL.as_str())
        .fetch_all(db)
        .await
}

fn group_by_course<T>(rows: Vec<T>, course_id: impl Fn(&T) -> &str) -> HashMap<String, Vec<T>> {
    let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
    for row in rows {
        grouped
            .entry(course_id(&row).to_string())
            .or_default()
            .push(row);
    }
    grouped
}

pub struct SqliteCourseStore {
    db: SqlitePool,
}

impl SqliteCourseStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn fetch_course_bundles(&self) -> Result<Vec<CourseBundle>, AppError> {
        let courses = fetch_courses(&self.db).await?;

        let organizations: HashMap<String, OrganizationSummary> = fetch_organizations(&self.db)
            .await?
            .into_iter()
            .map(|o| (o.id.clone(), o))
            .collect();
        let mut images = group_by_course(fetch_images(&self.db).await?, |i| i.course_id.as_str());
        let mut badges = group_by_course(fetch_badges(&self.db).await?, |b| b.course_id.as_str());
        let mut faqs = group_by_course(fetch_faqs(&self.db).await?, |f| f.course_id.as_str());

        debug!(
            "loaded {} courses, {} organizations",
            courses.len(),
            organizations.len()
        );

        let bundles = courses
            .into_iter()
            .map(|record| {
                let organization = record
                    .organization_id
                    .as_ref()
                    .and_then(|id| organizations.get(id).cloned());
                CourseBundle {
                    organization,
                    images: images.remove(&record.id).unwrap_or_default(),
                    badges: badges.remove(&record.id).unwrap_or_default(),
                    faq: faqs.remove(&record.id).unwrap_or_default(),
                    record,
                }
            })
            .collect();

        Ok(bundles)
    }
}
