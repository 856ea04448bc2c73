use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArsenalUser::Table)
                    .if_not_exists()
                    .col(pk_auto(ArsenalUser::Id))
                    .col(string_uniq(ArsenalUser::Username))
                    .col(string(ArsenalUser::Name))
                    .col(string(ArsenalUser::Rank))
                    .col(string(ArsenalUser::Role))
                    .col(string_null(ArsenalUser::Appointment))
                    .col(string(ArsenalUser::PasswordHash))
                    .col(timestamp(ArsenalUser::CreatedAt))
                    .col(timestamp(ArsenalUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArsenalUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ArsenalUser {
    Table,
    Id,
    Username,
    Name,
    Rank,
    Role,
    Appointment,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}
