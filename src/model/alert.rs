use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AlertDto {
    pub id: i32,
    pub inventory_stock_id: i32,
    pub alert_type: String,
    pub status: String,
    pub message: String,
    pub acknowledged_by: Option<i32>,
    pub acknowledged_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AcknowledgeAlertDto {
    /// The user acknowledging the alert
    pub user_id: i32,
}

/// Result of an on-demand alert sweep
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AlertSweepDto {
    /// Number of new alerts raised by this sweep
    pub created: u64,
}
