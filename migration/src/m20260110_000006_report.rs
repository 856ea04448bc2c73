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
                    .table(Report::Table)
                    .if_not_exists()
                    .col(pk_auto(Report::Id))
                    .col(string(Report::Name))
                    .col(string(Report::ReportType))
                    .col(string(Report::Period))
                    .col(string_null(Report::Description))
                    .col(string(Report::FileName))
                    .col(big_integer(Report::FileSize))
                    .col(integer_null(Report::UploadedBy))
                    .col(integer(Report::DownloadCount))
                    .col(timestamp_null(Report::LastAccessed))
                    .col(timestamp(Report::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_uploaded_by")
                            .from(Report::Table, Report::UploadedBy)
                            .to(ArsenalUser::Table, ArsenalUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Report {
    Table,
    Id,
    Name,
    ReportType,
    Period,
    Description,
    FileName,
    FileSize,
    UploadedBy,
    DownloadCount,
    LastAccessed,
    CreatedAt,
}
