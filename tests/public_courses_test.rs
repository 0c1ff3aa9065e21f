use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use course_portal::api::router;
use course_portal::db::{CourseStore, SqliteCourseStore};
use course_portal::error::AppError;
use course_portal::models::CourseBundle;
use course_portal::state::AppState;

async fn memory_pool() -> SqlitePool {
    // a single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn app_for(pool: SqlitePool) -> axum::Router {
    router(AppState {
        db: pool.clone(),
        courses: Arc::new(SqliteCourseStore::new(pool)),
    })
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, serde_json::from_slice(&bytes).expect("body is not json"))
}

async fn insert_organization(db: &SqlitePool) {
    sqlx::query(
        r#"
        INSERT INTO organizations
            (id, name, description, phone, email, address, facebook_page,
            latitude, longitude, district, province, logo_image)
        VALUES (?, ?, NULL, ?, ?, NULL, ?, ?, ?, ?, ?, NULL)
        "#,
    )
    .bind("org-1")
    .bind("Skills Centre")
    .bind("09123456789")
    .bind("hello@skills.example")
    .bind("https://facebook.com/skills")
    .bind(16.8409)
    .bind(96.1735)
    .bind("Yangon")
    .bind("Yangon Region")
    .execute(db)
    .await
    .expect("Failed to insert organization");
}

async fn insert_minimal_course(db: &SqlitePool, id: &str, slug: &str) {
    sqlx::query(
        r#"
        INSERT INTO courses (id, slug, title, start_date, end_date)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(slug)
    .bind(format!("Course {}", id))
    .bind(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap())
    .bind(Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap())
    .execute(db)
    .await
    .expect("Failed to insert course");
}

async fn insert_full_course(db: &SqlitePool) {
    insert_organization(db).await;

    sqlx::query(
        r#"
        INSERT INTO courses
            (id, slug, title, title_mm, start_date, start_date_mm, end_date,
            province, district, apply_by_date, fee_amount, age_min, age_max,
            available_days, how_to_apply, estimated_date, estimated_date_mm,
            apply_link, organization_id)
        VALUES (?, ?, ?, ?, ?, NULL, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind("course-1")
    .bind("tailoring")
    .bind("Tailoring")
    .bind("အပ်ချုပ်")
    .bind(Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap())
    .bind(Utc.with_ymd_and_hms(2025, 4, 30, 17, 0, 0).unwrap())
    .bind("Yangon Region")
    .bind("Yangon")
    .bind(Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap())
    .bind(50000_i64)
    .bind(16)
    .bind(35)
    .bind(r#"["Mon","Wed"]"#)
    .bind(r#"["Fill in the form","Attend the interview"]"#)
    .bind("Early February")
    .bind("ဖေဖော်ဝါရီ")
    .bind("https://apply.example/tailoring")
    .bind("org-1")
    .execute(db)
    .await
    .expect("Failed to insert course");

    sqlx::query("INSERT INTO course_images (id, url, course_id) VALUES (?, ?, ?)")
        .bind("img-1")
        .bind("https://cdn.example/tailoring.jpg")
        .bind("course-1")
        .execute(db)
        .await
        .expect("Failed to insert image");

    sqlx::query(
        "INSERT INTO course_badges (id, text, color, background_color, course_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind("badge-1")
    .bind("Free")
    .bind("#ffffff")
    .bind("#16a34a")
    .bind("course-1")
    .execute(db)
    .await
    .expect("Failed to insert badge");

    sqlx::query(
        "INSERT INTO course_faqs (question, question_mm, answer, answer_mm, course_id) VALUES (?, ?, ?, NULL, ?)",
    )
    .bind("Is lunch provided?")
    .bind("နေ့လည်စာ ပါသလား")
    .bind("Yes")
    .bind("course-1")
    .execute(db)
    .await
    .expect("Failed to insert faq");
}

#[tokio::test]
async fn test_public_courses_projects_full_record() {
    let db = memory_pool().await;
    insert_full_course(&db).await;

    let (status, body) = get_json(app_for(db), "/api/courses/public").await;
    assert_eq!(status, StatusCode::OK);

    let courses = body.as_array().expect("body is not an array");
    assert_eq!(courses.len(), 1);
    let course = &courses[0];

    assert_eq!(course["id"], "course-1");
    assert_eq!(course["titleMm"], "အပ်ချုပ်");
    assert_eq!(course["startDate"], "2025-02-01T08:00:00.000Z");
    assert_eq!(course["startDateMm"], Value::Null);
    assert_eq!(course["endDate"], "2025-04-30T17:00:00.000Z");
    assert_eq!(course["applyByDate"], "2025-01-20T00:00:00.000Z");
    assert_eq!(course["applyByDateMm"], Value::Null);
    assert_eq!(course["estimatedDate"], "Early February");
    assert_eq!(course["estimatedDateMm"], "ဖေဖော်ဝါရီ");

    assert_eq!(course["location"], "Yangon, Yangon Region");
    assert_eq!(course["locationMm"], Value::Null);
    assert_eq!(course["feeAmount"], 50000);
    assert_eq!(course["fee"], "50000");
    assert_eq!(course["feeMm"], Value::Null);
    assert_eq!(course["ageMin"], 16);
    assert_eq!(course["ageMax"], 35);

    assert_eq!(course["availableDays"], json!(["Mon", "Wed"]));
    assert_eq!(
        course["howToApply"],
        json!(["Fill in the form", "Attend the interview"])
    );
    assert_eq!(course["howToApplyMm"], json!([]));

    assert_eq!(course["organizationInfo"]["name"], "Skills Centre");
    assert_eq!(
        course["organizationInfo"]["facebookPage"],
        "https://facebook.com/skills"
    );
    assert_eq!(course["organizationInfo"]["province"], "Yangon Region");

    assert_eq!(
        course["images"],
        json!([{
            "id": "img-1",
            "url": "https://cdn.example/tailoring.jpg",
            "courseId": "course-1"
        }])
    );
    assert_eq!(
        course["badges"],
        json!([{
            "id": "badge-1",
            "text": "Free",
            "color": "#ffffff",
            "backgroundColor": "#16a34a",
            "courseId": "course-1"
        }])
    );
    assert_eq!(
        course["faq"],
        json!([{
            "question": "Is lunch provided?",
            "questionMm": "နေ့လည်စာ ပါသလား",
            "answer": "Yes",
            "answerMm": null
        }])
    );
}

#[tokio::test]
async fn test_public_courses_defaults_for_sparse_record() {
    let db = memory_pool().await;
    insert_minimal_course(&db, "course-a", "a").await;

    let (status, body) = get_json(app_for(db), "/api/courses/public").await;
    assert_eq!(status, StatusCode::OK);

    let course = &body[0];
    assert_eq!(course["location"], "");
    assert_eq!(course["fee"], "");
    assert_eq!(course["feeMm"], Value::Null);
    assert_eq!(course["howToApply"], json!([]));
    assert_eq!(course["howToApplyMm"], json!([]));
    assert_eq!(course["organizationInfo"], Value::Null);
    assert_eq!(course["images"], json!([]));
    assert_eq!(course["badges"], json!([]));
    assert_eq!(course["faq"], json!([]));
}

#[tokio::test]
async fn test_public_courses_keeps_store_order() {
    let db = memory_pool().await;
    insert_minimal_course(&db, "course-z", "zeta").await;
    insert_minimal_course(&db, "course-a", "alpha").await;
    insert_minimal_course(&db, "course-m", "mu").await;

    let (_, body) = get_json(app_for(db), "/api/courses/public").await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["course-z", "course-a", "course-m"]);
}

#[tokio::test]
async fn test_public_courses_groups_relations_per_course() {
    let db = memory_pool().await;
    insert_minimal_course(&db, "course-a", "a").await;
    insert_minimal_course(&db, "course-b", "b").await;
    for (id, course_id) in [("img-1", "course-b"), ("img-2", "course-a"), ("img-3", "course-b")] {
        sqlx::query("INSERT INTO course_images (id, url, course_id) VALUES (?, ?, ?)")
            .bind(id)
            .bind(format!("https://cdn.example/{}.jpg", id))
            .bind(course_id)
            .execute(&db)
            .await
            .expect("Failed to insert image");
    }

    let (_, body) = get_json(app_for(db), "/api/courses/public").await;
    let image_ids = |index: usize| -> Vec<String> {
        body[index]["images"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(image_ids(0), vec!["img-2"]);
    assert_eq!(image_ids(1), vec!["img-1", "img-3"]);
}

#[tokio::test]
async fn test_public_courses_empty_store() {
    let db = memory_pool().await;

    let (status, body) = get_json(app_for(db), "/api/courses/public").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

struct FailingCourseStore;

#[async_trait]
impl CourseStore for FailingCourseStore {
    async fn fetch_course_bundles(&self) -> Result<Vec<CourseBundle>, AppError> {
        Err(AppError::Database(sqlx::Error::Protocol(
            "connection refused by db-internal-7".to_string(),
        )))
    }
}

#[tokio::test]
async fn test_public_courses_store_failure_is_generic_500() {
    let db = memory_pool().await;
    let app = router(AppState {
        db,
        courses: Arc::new(FailingCourseStore),
    });

    let (status, body) = get_json(app, "/api/courses/public").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch courses" }));
    assert!(!body.to_string().contains("db-internal-7"));
}

#[tokio::test]
async fn test_public_courses_closed_pool_is_generic_500() {
    let db = memory_pool().await;
    insert_minimal_course(&db, "course-a", "a").await;
    let app = app_for(db.clone());
    db.close().await;

    let (status, body) = get_json(app, "/api/courses/public").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch courses" }));
}

#[tokio::test]
async fn test_health() {
    let db = memory_pool().await;

    let response = app_for(db)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
}
