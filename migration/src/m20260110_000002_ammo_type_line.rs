use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AmmoTypeLine::Table)
                    .if_not_exists()
                    .col(pk_auto(AmmoTypeLine::Id))
                    .col(string(AmmoTypeLine::Caliber))
                    .col(string(AmmoTypeLine::Category))
                    .col(string(AmmoTypeLine::Nature))
                    .col(timestamp(AmmoTypeLine::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AmmoTypeLine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AmmoTypeLine {
    Table,
    Id,
    Caliber,
    Category,
    Nature,
    CreatedAt,
}
