use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Organization that runs a course, as exposed in `organizationInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub facebook_page: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub logo_image: Option<String>,
}
