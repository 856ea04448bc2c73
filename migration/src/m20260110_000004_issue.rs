use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_arsenal_user::ArsenalUser;
use crate::m20260110_000002_ammo_type_line::AmmoTypeLine;
use crate::m20260110_000003_inventory_stock::InventoryStock;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(pk_auto(Issue::Id))
                    .col(integer(Issue::InventoryStockId))
                    .col(integer(Issue::UserId))
                    .col(date(Issue::IssueDate))
                    .col(integer(Issue::IssueQuantity))
                    .col(integer_null(Issue::TypeLineId))
                    .col(timestamp(Issue::CreatedAt))
                    .col(timestamp(Issue::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_inventory_stock")
                            .from(Issue::Table, Issue::InventoryStockId)
                            .to(InventoryStock::Table, InventoryStock::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_requester")
                            .from(Issue::Table, Issue::UserId)
                            .to(ArsenalUser::Table, ArsenalUser::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_type_line")
                            .from(Issue::Table, Issue::TypeLineId)
                            .to(AmmoTypeLine::Table, AmmoTypeLine::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issue_issue_date")
                    .table(Issue::Table)
                    .col(Issue::IssueDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Issue {
    Table,
    Id,
    InventoryStockId,
    UserId,
    IssueDate,
    IssueQuantity,
    TypeLineId,
    CreatedAt,
    UpdatedAt,
}
