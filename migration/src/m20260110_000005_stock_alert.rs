use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_arsenal_user::ArsenalUser;
use crate::m20260110_000003_inventory_stock::InventoryStock;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(StockAlert::Id))
                    .col(integer(StockAlert::InventoryStockId))
                    .col(string_len(StockAlert::AlertType, 16))
                    .col(string_len(StockAlert::Status, 16))
                    .col(string(StockAlert::Message))
                    .col(string_null(StockAlert::DedupKey))
                    .col(integer_null(StockAlert::AcknowledgedBy))
                    .col(timestamp_null(StockAlert::AcknowledgedAt))
                    .col(timestamp(StockAlert::CreatedAt))
                    .col(timestamp(StockAlert::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stock_alert_inventory_stock")
                            .from(StockAlert::Table, StockAlert::InventoryStockId)
                            .to(InventoryStock::Table, InventoryStock::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stock_alert_acknowledged_by")
                            .from(StockAlert::Table, StockAlert::AcknowledgedBy)
                            .to(ArsenalUser::Table, ArsenalUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // One live alert per lot + type; the dedup key is cleared when an
        // alert is dismissed or resolved, which frees the slot.
        manager
            .create_index(
                Index::create()
                    .name("idx_stock_alert_dedup_key")
                    .table(StockAlert::Table)
                    .col(StockAlert::DedupKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockAlert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StockAlert {
    Table,
    Id,
    InventoryStockId,
    AlertType,
    Status,
    Message,
    DedupKey,
    AcknowledgedBy,
    AcknowledgedAt,
    CreatedAt,
    UpdatedAt,
}
