use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use sqlx::types::Json;

use super::{Badge, FaqEntry, ImageRef, OrganizationSummary};

/// A course row exactly as selected from the store.
///
/// `start_date` and `end_date` are declared `NOT NULL` but are decoded as
/// options so that a null coming back from the store is reported instead of
/// silently defaulted.
#[derive(Debug, Clone, FromRow)]
pub struct CourseRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub title_mm: Option<String>,
    pub subtitle: Option<String>,
    pub subtitle_mm: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub start_date_mm: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub end_date_mm: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub duration_mm: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub schedule: Option<String>,
    pub schedule_mm: Option<String>,
    pub address: Option<String>,
    pub apply_by_date: Option<DateTime<Utc>>,
    pub apply_by_date_mm: Option<DateTime<Utc>>,
    pub fee_amount: Option<i64>,
    pub fee_amount_mm: Option<i64>,
    pub age_min: Option<i32>,
    pub age_min_mm: Option<i32>,
    pub age_max: Option<i32>,
    pub age_max_mm: Option<i32>,
    pub document: Option<String>,
    pub document_mm: Option<String>,
    pub available_days: Option<Json<Vec<String>>>,
    pub description: Option<String>,
    pub description_mm: Option<String>,
    pub outcomes: Option<String>,
    pub outcomes_mm: Option<String>,
    pub schedule_details: Option<String>,
    pub schedule_details_mm: Option<String>,
    pub selection_criteria: Option<String>,
    pub selection_criteria_mm: Option<String>,
    pub how_to_apply: Option<Json<Vec<String>>>,
    pub how_to_apply_mm: Option<Json<Vec<String>>>,
    pub apply_button_text: Option<String>,
    pub apply_button_text_mm: Option<String>,
    pub apply_link: Option<String>,
    pub estimated_date: Option<String>,
    pub estimated_date_mm: Option<String>,
    pub organization_id: Option<String>,
}

/// One course together with everything loaded for it from related tables.
#[derive(Debug, Clone)]
pub struct CourseBundle {
    pub record: CourseRecord,
    pub organization: Option<OrganizationSummary>,
    pub images: Vec<ImageRef>,
    pub badges: Vec<Badge>,
    pub faq: Vec<FaqEntry>,
}

/// Public shape served by `GET /api/courses/public`.
///
/// Field names are part of the client contract. `location`, `locationMm`,
/// `fee` and `feeMm` are derived for clients written against the older
/// schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListing {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub title_mm: Option<String>,
    pub subtitle: Option<String>,
    pub subtitle_mm: Option<String>,
    pub start_date: String,
    pub start_date_mm: Option<String>,
    pub end_date: String,
    pub end_date_mm: Option<String>,
    pub duration: Option<String>,
    pub duration_mm: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub schedule: Option<String>,
    pub schedule_mm: Option<String>,
    pub address: Option<String>,
    pub apply_by_date: Option<String>,
    pub apply_by_date_mm: Option<String>,
    pub fee_amount: Option<i64>,
    pub fee_amount_mm: Option<i64>,
    pub age_min: Option<i32>,
    pub age_min_mm: Option<i32>,
    pub age_max: Option<i32>,
    pub age_max_mm: Option<i32>,
    pub document: Option<String>,
    pub document_mm: Option<String>,
    pub available_days: Vec<String>,
    pub description: Option<String>,
    pub description_mm: Option<String>,
    pub outcomes: Option<String>,
    pub outcomes_mm: Option<String>,
    pub schedule_details: Option<String>,
    pub schedule_details_mm: Option<String>,
    pub selection_criteria: Option<String>,
    pub selection_criteria_mm: Option<String>,
    pub how_to_apply: Vec<String>,
    pub how_to_apply_mm: Vec<String>,
    pub apply_button_text: Option<String>,
    pub apply_button_text_mm: Option<String>,
    pub apply_link: Option<String>,
    pub estimated_date: Option<String>,
    pub estimated_date_mm: Option<String>,
    pub organization_info: Option<OrganizationSummary>,
    pub images: Vec<ImageRef>,
    pub badges: Vec<Badge>,
    pub faq: Vec<FaqEntry>,
    pub location: String,
    pub location_mm: Option<String>,
    pub fee: String,
    pub fee_mm: Option<String>,
}
