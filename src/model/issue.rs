use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IssueDto {
    pub id: i32,
    pub inventory_stock_id: i32,
    pub user_id: i32,
    pub issue_date: NaiveDate,
    pub issue_quantity: i32,
    pub type_line_id: Option<i32>,
}

/// Issue row joined with its stock lot, requester, and ammunition type line
/// so the issues table can render human-readable columns in one call.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IssueDetailDto {
    pub id: i32,
    pub inventory_stock_id: i32,
    pub user_id: i32,
    pub issue_date: NaiveDate,
    pub issue_quantity: i32,
    pub type_line_id: Option<i32>,
    pub lot_number: Option<String>,
    pub lot_quantity: Option<i32>,
    pub requester_name: Option<String>,
    pub caliber: Option<String>,
}

/// Request body for creating an issue. Missing required fields are rejected
/// at deserialization, before any storage access.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateIssueDto {
    pub inventory_stock_id: i32,
    pub user_id: i32,
    pub issue_date: NaiveDate,
    pub issue_quantity: i32,
    pub type_line_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IssueCreatedDto {
    pub issue_id: i32,
    pub message: String,
}
