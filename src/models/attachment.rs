use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub id: String,
    pub url: String,
    pub course_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub text: String,
    pub color: String,
    pub background_color: String,
    pub course_id: String,
}

/// FAQ rows carry no identifier in the public shape. `course_id` is only
/// used to group rows under their course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub question_mm: Option<String>,
    pub answer: String,
    pub answer_mm: Option<String>,
    #[serde(skip)]
    pub course_id: String,
}
