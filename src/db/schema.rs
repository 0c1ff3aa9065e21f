//! Column selections for every table read by the public course listing.
//!
//! Each table is described by an explicit list of columns and the JSON name
//! the value is published under. SELECT statements are generated from these
//! lists, so adding a column to the response means adding it here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub column: &'static str,
    /// `None` for join keys that are selected but never published.
    pub json: Option<&'static str>,
}

const fn field(column: &'static str, json: &'static str) -> FieldMapping {
    FieldMapping {
        column,
        json: Some(json),
    }
}

const fn join_key(column: &'static str) -> FieldMapping {
    FieldMapping { column, json: None }
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub table: &'static str,
    pub fields: &'static [FieldMapping],
}

impl Projection {
    pub fn select_sql(&self) -> String {
        let columns: Vec<&str> = self.fields.iter().map(|f| f.column).collect();
        format!("SELECT {} FROM {}", columns.join(", "), self.table)
    }

    pub fn public_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter_map(|f| f.json)
    }
}

pub const COURSES: Projection = Projection {
    table: "courses",
    fields: &[
        field("id", "id"),
        field("slug", "slug"),
        field("title", "title"),
        field("title_mm", "titleMm"),
        field("subtitle", "subtitle"),
        field("subtitle_mm", "subtitleMm"),
        field("start_date", "startDate"),
        field("start_date_mm", "startDateMm"),
        field("end_date", "endDate"),
        field("end_date_mm", "endDateMm"),
        field("duration", "duration"),
        field("duration_mm", "durationMm"),
        field("province", "province"),
        field("district", "district"),
        field("schedule", "schedule"),
        field("schedule_mm", "scheduleMm"),
        field("address", "address"),
        field("apply_by_date", "applyByDate"),
        field("apply_by_date_mm", "applyByDateMm"),
        field("fee_amount", "feeAmount"),
        field("fee_amount_mm", "feeAmountMm"),
        field("age_min", "ageMin"),
        field("age_min_mm", "ageMinMm"),
        field("age_max", "ageMax"),
        field("age_max_mm", "ageMaxMm"),
        field("document", "document"),
        field("document_mm", "documentMm"),
        field("available_days", "availableDays"),
        field("description", "description"),
        field("description_mm", "descriptionMm"),
        field("outcomes", "outcomes"),
        field("outcomes_mm", "outcomesMm"),
        field("schedule_details", "scheduleDetails"),
        field("schedule_details_mm", "scheduleDetailsMm"),
        field("selection_criteria", "selectionCriteria"),
        field("selection_criteria_mm", "selectionCriteriaMm"),
        field("how_to_apply", "howToApply"),
        field("how_to_apply_mm", "howToApplyMm"),
        field("apply_button_text", "applyButtonText"),
        field("apply_button_text_mm", "applyButtonTextMm"),
        field("apply_link", "applyLink"),
        field("estimated_date", "estimatedDate"),
        field("estimated_date_mm", "estimatedDateMm"),
        join_key("organization_id"),
    ],
};

pub const ORGANIZATIONS: Projection = Projection {
    table: "organizations",
    fields: &[
        field("id", "id"),
        field("name", "name"),
        field("description", "description"),
        field("phone", "phone"),
        field("email", "email"),
        field("address", "address"),
        field("facebook_page", "facebookPage"),
        field("latitude", "latitude"),
        field("longitude", "longitude"),
        field("district", "district"),
        field("province", "province"),
        field("logo_image", "logoImage"),
    ],
};

pub const IMAGES: Projection = Projection {
    table: "course_images",
    fields: &[
        field("id", "id"),
        field("url", "url"),
        field("course_id", "courseId"),
    ],
};

pub const BADGES: Projection = Projection {
    table: "course_badges",
    fields: &[
        field("id", "id"),
        field("text", "text"),
        field("color", "color"),
        field("background_color", "backgroundColor"),
        field("course_id", "courseId"),
    ],
};

pub const FAQS: Projection = Projection {
    table: "course_faqs",
    fields: &[
        field("question", "question"),
        field("question_mm", "questionMm"),
        field("answer", "answer"),
        field("answer_mm", "answerMm"),
        join_key("course_id"),
    ],
};

/// Keys added to each listing on top of the stored columns.
pub const DERIVED_COURSE_FIELDS: &[&str] = &[
    "organizationInfo",
    "images",
    "badges",
    "faq",
    "location",
    "locationMm",
    "fee",
    "feeMm",
];
