use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    ExprTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::inventory::CreateStockLotDto;

/// Outcome of a conditional stock decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecrementOutcome {
    /// Quantity was reduced by the requested amount
    Applied,
    /// Lot exists but holds less than the requested amount
    Insufficient,
    /// Lot does not exist
    NotFound,
}

pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new instance of [`InventoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new stock lot
    pub async fn create(
        &self,
        lot: &CreateStockLotDto,
    ) -> Result<entity::inventory_stock::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let stock = entity::inventory_stock::ActiveModel {
            custodian_id: ActiveValue::Set(lot.custodian_id),
            quantity: ActiveValue::Set(lot.quantity),
            lot_number: ActiveValue::Set(lot.lot_number.clone()),
            stock_date: ActiveValue::Set(lot.stock_date),
            expiry_date: ActiveValue::Set(lot.expiry_date),
            min_threshold: ActiveValue::Set(lot.min_threshold),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        stock.insert(self.db).await
    }

    pub async fn get(
        &self,
        stock_id: i32,
    ) -> Result<Option<entity::inventory_stock::Model>, DbErr> {
        entity::prelude::InventoryStock::find_by_id(stock_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::inventory_stock::Model>, DbErr> {
        entity::prelude::InventoryStock::find()
            .order_by_asc(entity::inventory_stock::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every editable field of a stock lot, including a direct
    /// correction of `quantity`.
    pub async fn update(
        &self,
        stock_id: i32,
        lot: &CreateStockLotDto,
    ) -> Result<Option<entity::inventory_stock::Model>, DbErr> {
        let stock = match entity::prelude::InventoryStock::find_by_id(stock_id)
            .one(self.db)
            .await?
        {
            Some(stock) => stock,
            None => return Ok(None),
        };

        let mut stock_am = stock.into_active_model();
        stock_am.custodian_id = ActiveValue::Set(lot.custodian_id);
        stock_am.quantity = ActiveValue::Set(lot.quantity);
        stock_am.lot_number = ActiveValue::Set(lot.lot_number.clone());
        stock_am.stock_date = ActiveValue::Set(lot.stock_date);
        stock_am.expiry_date = ActiveValue::Set(lot.expiry_date);
        stock_am.min_threshold = ActiveValue::Set(lot.min_threshold);
        stock_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let stock = stock_am.update(self.db).await?;

        Ok(Some(stock))
    }

    /// Deletes a stock lot
    ///
    /// Returns OK regardless of the lot existing; check
    /// [`DeleteResult::rows_affected`] for the outcome. Lots referenced by
    /// issue records are protected by a restrict foreign key.
    pub async fn delete(&self, stock_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::InventoryStock::delete_by_id(stock_id)
            .exec(self.db)
            .await
    }

    /// Conditionally decrements a lot's quantity.
    ///
    /// The guard `quantity >= amount` is part of the UPDATE itself, so the
    /// check and the write happen under one row lock; this is the
    /// authoritative re-check that closes the race window between reading a
    /// quantity and acting on it. Must be called on the same transaction as
    /// the issue insert it pairs with.
    pub async fn decrement_quantity(
        &self,
        stock_id: i32,
        amount: i32,
    ) -> Result<DecrementOutcome, DbErr> {
        let result = entity::prelude::InventoryStock::update_many()
            .col_expr(
                entity::inventory_stock::Column::Quantity,
                Expr::col(entity::inventory_stock::Column::Quantity).sub(amount),
            )
            .col_expr(
                entity::inventory_stock::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::inventory_stock::Column::Id.eq(stock_id))
            .filter(entity::inventory_stock::Column::Quantity.gte(amount))
            .exec(self.db)
            .await?;

        if result.rows_affected == 1 {
            return Ok(DecrementOutcome::Applied);
        }

        // Zero rows means the guard failed: the lot is either gone or no
        // longer holds enough. Look again on the same connection to tell the
        // two apart.
        match entity::prelude::InventoryStock::find_by_id(stock_id)
            .one(self.db)
            .await?
        {
            Some(_) => Ok(DecrementOutcome::Insufficient),
            None => Ok(DecrementOutcome::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {

    fn lot_dto(custodian_id: i32, quantity: i32, lot_number: &str) -> CreateStockLotDto {
        CreateStockLotDto {
            custodian_id,
            quantity,
            lot_number: lot_number.to_string(),
            stock_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            expiry_date: None,
            min_threshold: None,
        }
    }

    use crate::model::inventory::CreateStockLotDto;

    mod create {
        use arsenal_test_utils::prelude::*;

        use crate::server::data::inventory::{tests::lot_dto, InventoryRepository};

        /// Expect success when creating a stock lot for an existing custodian
        #[tokio::test]
        async fn creates_stock_lot() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;

            let repo = InventoryRepository::new(&test.db);
            let result = repo.create(&lot_dto(user.id, 500, "LOT-A")).await;

            assert!(result.is_ok());
            let lot = result.unwrap();
            assert_eq!(lot.quantity, 500);

            Ok(())
        }

        /// Expect Error when the custodian does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_custodian() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;

            let repo = InventoryRepository::new(&test.db);
            let result = repo.create(&lot_dto(42, 500, "LOT-A")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get {
        use arsenal_test_utils::prelude::*;

        use crate::server::data::inventory::InventoryRepository;

        /// Expect Ok(Some(_)) when the lot exists
        #[tokio::test]
        async fn finds_existing_lot() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;
            let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

            let repo = InventoryRepository::new(&test.db);
            let result = repo.get(lot.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when the lot does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_lot() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;

            let repo = InventoryRepository::new(&test.db);
            let result = repo.get(999).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect repeated reads without intervening writes to agree
        #[tokio::test]
        async fn read_is_stable_without_writes() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;
            let lot = test.inventory().insert_stock_lot(user.id, 250, "LOT-A").await?;

            let repo = InventoryRepository::new(&test.db);
            let first = repo.get(lot.id).await?.unwrap();
            let second = repo.get(lot.id).await?.unwrap();

            assert_eq!(first.quantity, second.quantity);

            Ok(())
        }
    }

    mod update {
        use arsenal_test_utils::prelude::*;

        use crate::server::data::inventory::{tests::lot_dto, InventoryRepository};

        /// Expect Ok(Some(_)) with replaced fields when updating an existing lot
        #[tokio::test]
        async fn updates_existing_lot() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;
            let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

            let repo = InventoryRepository::new(&test.db);
            let result = repo.update(lot.id, &lot_dto(user.id, 80, "LOT-B")).await;

            assert!(matches!(result, Ok(Some(_))));
            let updated = result.unwrap().unwrap();
            assert_eq!(updated.quantity, 80);
            assert_eq!(updated.lot_number, "LOT-B");

            Ok(())
        }

        /// Expect Ok(None) when updating a lot that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_lot() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;

            let repo = InventoryRepository::new(&test.db);
            let result = repo.update(999, &lot_dto(user.id, 80, "LOT-B")).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use arsenal_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::inventory::InventoryRepository;

        /// Expect success when deleting an unreferenced lot
        #[tokio::test]
        async fn deletes_existing_lot() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;
            let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

            let repo = InventoryRepository::new(&test.db);
            let result = repo.delete(lot.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);

            let lot_exists = entity::prelude::InventoryStock::find_by_id(lot.id)
                .one(&test.db)
                .await?;
            assert!(lot_exists.is_none());

            Ok(())
        }

        /// Expect no rows affected when deleting a lot that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_lot() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;

            let repo = InventoryRepository::new(&test.db);
            let result = repo.delete(999).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 0);

            Ok(())
        }
    }

    mod decrement_quantity {
        use arsenal_test_utils::prelude::*;

        use crate::server::data::inventory::{DecrementOutcome, InventoryRepository};

        /// Expect Applied and a reduced quantity when enough stock is on hand
        #[tokio::test]
        async fn applies_when_stock_suffices() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;
            let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

            let repo = InventoryRepository::new(&test.db);
            let outcome = repo.decrement_quantity(lot.id, 80).await?;

            assert_eq!(outcome, DecrementOutcome::Applied);
            let lot = repo.get(lot.id).await?.unwrap();
            assert_eq!(lot.quantity, 20);

            Ok(())
        }

        /// Expect the quantity to reach exactly zero when the full amount is taken
        #[tokio::test]
        async fn applies_down_to_zero() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;
            let lot = test.inventory().insert_stock_lot(user.id, 500, "LOT-A").await?;

            let repo = InventoryRepository::new(&test.db);
            let outcome = repo.decrement_quantity(lot.id, 500).await?;

            assert_eq!(outcome, DecrementOutcome::Applied);
            assert_eq!(repo.get(lot.id).await?.unwrap().quantity, 0);

            Ok(())
        }

        /// Expect Insufficient and an untouched quantity when the lot holds too little
        #[tokio::test]
        async fn refuses_when_stock_short() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let user = test.user().insert_user("custodian").await?;
            let lot = test.inventory().insert_stock_lot(user.id, 50, "LOT-A").await?;

            let repo = InventoryRepository::new(&test.db);
            let outcome = repo.decrement_quantity(lot.id, 51).await?;

            assert_eq!(outcome, DecrementOutcome::Insufficient);
            assert_eq!(repo.get(lot.id).await?.unwrap().quantity, 50);

            Ok(())
        }

        /// Expect NotFound for a lot that does not exist
        #[tokio::test]
        async fn reports_missing_lot() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;

            let repo = InventoryRepository::new(&test.db);
            let outcome = repo.decrement_quantity(999, 1).await?;

            assert_eq!(outcome, DecrementOutcome::NotFound);

            Ok(())
        }
    }
}
