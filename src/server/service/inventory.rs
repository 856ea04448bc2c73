//! Stock ledger operations.
//!
//! Reads and direct edits of stock lots. Quantity reads served here are
//! advisory; any disbursal decision is re-validated inside the issue
//! transaction (see [`crate::server::service::issue`]).

use sea_orm::DatabaseConnection;

use crate::{
    model::inventory::CreateStockLotDto,
    server::{
        data::inventory::InventoryRepository,
        error::{inventory::InventoryError, Error},
    },
};

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_lots(&self) -> Result<Vec<entity::inventory_stock::Model>, Error> {
        Ok(InventoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_lot(&self, stock_id: i32) -> Result<entity::inventory_stock::Model, Error> {
        InventoryRepository::new(self.db)
            .get(stock_id)
            .await?
            .ok_or_else(|| InventoryError::NotFound(stock_id).into())
    }

    /// Current on-hand quantity for a lot. Advisory outside a transaction.
    pub async fn get_quantity(&self, stock_id: i32) -> Result<i32, Error> {
        Ok(self.get_lot(stock_id).await?.quantity)
    }

    pub async fn add_lot(
        &self,
        lot: &CreateStockLotDto,
    ) -> Result<entity::inventory_stock::Model, Error> {
        Ok(InventoryRepository::new(self.db).create(lot).await?)
    }

    pub async fn update_lot(
        &self,
        stock_id: i32,
        lot: &CreateStockLotDto,
    ) -> Result<entity::inventory_stock::Model, Error> {
        InventoryRepository::new(self.db)
            .update(stock_id, lot)
            .await?
            .ok_or_else(|| InventoryError::NotFound(stock_id).into())
    }

    pub async fn delete_lot(&self, stock_id: i32) -> Result<(), Error> {
        let result = InventoryRepository::new(self.db).delete(stock_id).await?;

        if result.rows_affected == 0 {
            return Err(InventoryError::NotFound(stock_id).into());
        }

        Ok(())
    }
}
