use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_arsenal_user::ArsenalUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryStock::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryStock::Id))
                    .col(integer(InventoryStock::CustodianId))
                    .col(integer(InventoryStock::Quantity))
                    .col(string(InventoryStock::LotNumber))
                    .col(date(InventoryStock::StockDate))
                    .col(date_null(InventoryStock::ExpiryDate))
                    .col(integer_null(InventoryStock::MinThreshold))
                    .col(timestamp(InventoryStock::CreatedAt))
                    .col(timestamp(InventoryStock::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_stock_custodian")
                            .from(InventoryStock::Table, InventoryStock::CustodianId)
                            .to(ArsenalUser::Table, ArsenalUser::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryStock::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryStock {
    Table,
    Id,
    CustodianId,
    Quantity,
    LotNumber,
    StockDate,
    ExpiryDate,
    MinThreshold,
    CreatedAt,
    UpdatedAt,
}
