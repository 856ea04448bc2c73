//! Dashboard aggregates.
//!
//! Display-only derivations over the inventory, issue, and alert tables; no
//! invariants live here.

use chrono::{Duration, Utc};
use entity::stock_alert::AlertStatus;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QuerySelect,
};

use crate::{model::dashboard::DashboardStatsDto, server::error::Error};

#[derive(FromQueryResult)]
struct SumRow {
    total: Option<i64>,
}

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn stats(&self, expiry_warning_days: i64) -> Result<DashboardStatsDto, Error> {
        let total_on_hand = entity::prelude::InventoryStock::find()
            .select_only()
            .column_as(entity::inventory_stock::Column::Quantity.sum(), "total")
            .into_model::<SumRow>()
            .one(self.db)
            .await?
            .and_then(|row| row.total)
            .unwrap_or(0);

        let total_issued = entity::prelude::Issue::find()
            .select_only()
            .column_as(entity::issue::Column::IssueQuantity.sum(), "total")
            .into_model::<SumRow>()
            .one(self.db)
            .await?
            .and_then(|row| row.total)
            .unwrap_or(0);

        let lot_count = entity::prelude::InventoryStock::find().count(self.db).await?;

        let open_alert_count = entity::prelude::StockAlert::find()
            .filter(entity::stock_alert::Column::Status.eq(AlertStatus::Open))
            .count(self.db)
            .await?;

        let cutoff = Utc::now().date_naive() + Duration::days(expiry_warning_days);
        let expiring_soon = entity::prelude::InventoryStock::find()
            .filter(entity::inventory_stock::Column::ExpiryDate.is_not_null())
            .filter(entity::inventory_stock::Column::ExpiryDate.lte(cutoff))
            .count(self.db)
            .await?;

        Ok(DashboardStatsDto {
            total_on_hand,
            total_issued,
            lot_count,
            open_alert_count,
            expiring_soon,
        })
    }
}
