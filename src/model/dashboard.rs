use serde::{Deserialize, Serialize};

/// Aggregate figures for the dashboard landing page. Display-only, derived
/// entirely from the inventory, issue, and alert tables.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardStatsDto {
    pub total_on_hand: i64,
    pub total_issued: i64,
    pub lot_count: u64,
    pub open_alert_count: u64,
    pub expiring_soon: u64,
}
