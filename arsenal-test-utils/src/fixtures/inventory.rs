use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    error::TestError,
    model::{AmmoTypeLineModel, StockLotModel},
    TestContext,
};

/// Inserts stock lot and type line rows.
pub struct InventoryFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TestContext {
    pub fn inventory(&self) -> InventoryFixtures<'_> {
        InventoryFixtures { db: &self.db }
    }
}

impl<'a> InventoryFixtures<'a> {
    /// Insert a stock lot with no expiry date or threshold.
    pub async fn insert_stock_lot(
        &self,
        custodian_id: i32,
        quantity: i32,
        lot_number: &str,
    ) -> Result<StockLotModel, TestError> {
        self.insert_stock_lot_detailed(custodian_id, quantity, lot_number, None, None)
            .await
    }

    /// Insert a stock lot with full control over expiry and threshold.
    pub async fn insert_stock_lot_detailed(
        &self,
        custodian_id: i32,
        quantity: i32,
        lot_number: &str,
        expiry_date: Option<NaiveDate>,
        min_threshold: Option<i32>,
    ) -> Result<StockLotModel, TestError> {
        let now = Utc::now().naive_utc();

        let lot = entity::inventory_stock::ActiveModel {
            custodian_id: ActiveValue::Set(custodian_id),
            quantity: ActiveValue::Set(quantity),
            lot_number: ActiveValue::Set(lot_number.to_string()),
            stock_date: ActiveValue::Set(
                NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid fixture date"),
            ),
            expiry_date: ActiveValue::Set(expiry_date),
            min_threshold: ActiveValue::Set(min_threshold),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(lot.insert(self.db).await?)
    }

    /// Insert an ammunition type line reference row.
    pub async fn insert_type_line(
        &self,
        caliber: &str,
        category: &str,
        nature: &str,
    ) -> Result<AmmoTypeLineModel, TestError> {
        let line = entity::ammo_type_line::ActiveModel {
            caliber: ActiveValue::Set(caliber.to_string()),
            category: ActiveValue::Set(category.to_string()),
            nature: ActiveValue::Set(nature.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(line.insert(self.db).await?)
    }
}
