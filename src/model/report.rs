use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReportDto {
    pub id: i32,
    pub name: String,
    pub report_type: String,
    pub period: String,
    pub description: Option<String>,
    pub file_size: i64,
    pub uploaded_by: Option<i32>,
    pub download_count: i32,
    pub last_accessed: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
