use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::types::Json;
use tracing::debug;

use crate::db::CourseStore;
use crate::error::AppError;
use crate::models::{CourseBundle, CourseListing};

/// Loads every stored course and reshapes it for public consumption.
///
/// No status filter and no sorting is applied: clients see all courses in
/// the order the store returns them.
pub async fn fetch_public_courses(store: &dyn CourseStore) -> Result<Vec<CourseListing>, AppError> {
    let bundles = store.fetch_course_bundles().await?;
    let listings = bundles
        .into_iter()
        .map(project_course)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("projected {} public courses", listings.len());
    Ok(listings)
}

pub fn project_course(bundle: CourseBundle) -> Result<CourseListing, AppError> {
    let CourseBundle {
        record: course,
        organization,
        images,
        badges,
        faq,
    } = bundle;

    let start_date = course.start_date.ok_or_else(|| AppError::MissingField {
        course_id: course.id.clone(),
        field: "startDate",
    })?;
    let end_date = course.end_date.ok_or_else(|| AppError::MissingField {
        course_id: course.id.clone(),
        field: "endDate",
    })?;

    let location = derive_location(course.district.as_deref(), course.province.as_deref());

    Ok(CourseListing {
        start_date: to_iso_string(start_date),
        start_date_mm: course.start_date_mm.map(to_iso_string),
        end_date: to_iso_string(end_date),
        end_date_mm: course.end_date_mm.map(to_iso_string),
        apply_by_date: course.apply_by_date.map(to_iso_string),
        apply_by_date_mm: course.apply_by_date_mm.map(to_iso_string),
        fee: course.fee_amount.map(|amount| amount.to_string()).unwrap_or_default(),
        fee_mm: course.fee_amount_mm.map(|amount| amount.to_string()),
        location,
        location_mm: None,
        available_days: list_or_empty(course.available_days),
        how_to_apply: list_or_empty(course.how_to_apply),
        how_to_apply_mm: list_or_empty(course.how_to_apply_mm),
        id: course.id,
        slug: course.slug,
        title: course.title,
        title_mm: course.title_mm,
        subtitle: course.subtitle,
        subtitle_mm: course.subtitle_mm,
        duration: course.duration,
        duration_mm: course.duration_mm,
        province: course.province,
        district: course.district,
        schedule: course.schedule,
        schedule_mm: course.schedule_mm,
        address: course.address,
        fee_amount: course.fee_amount,
        fee_amount_mm: course.fee_amount_mm,
        age_min: course.age_min,
        age_min_mm: course.age_min_mm,
        age_max: course.age_max,
        age_max_mm: course.age_max_mm,
        document: course.document,
        document_mm: course.document_mm,
        description: course.description,
        description_mm: course.description_mm,
        outcomes: course.outcomes,
        outcomes_mm: course.outcomes_mm,
        schedule_details: course.schedule_details,
        schedule_details_mm: course.schedule_details_mm,
        selection_criteria: course.selection_criteria,
        selection_criteria_mm: course.selection_criteria_mm,
        apply_button_text: course.apply_button_text,
        apply_button_text_mm: course.apply_button_text_mm,
        apply_link: course.apply_link,
        // free text, not timestamps
        estimated_date: course.estimated_date,
        estimated_date_mm: course.estimated_date_mm,
        organization_info: organization,
        images,
        badges,
        faq,
    })
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-01-15T00:00:00.000Z`.
pub fn to_iso_string(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `"district, province"`, skipping parts that are missing or empty.
pub fn derive_location(district: Option<&str>, province: Option<&str>) -> String {
    [district, province]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn list_or_empty(value: Option<Json<Vec<String>>>) -> Vec<String> {
    value.map(|Json(items)| items).unwrap_or_default()
}
