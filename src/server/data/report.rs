use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    ExprTrait, QueryFilter, QueryOrder,
};

/// Metadata for a report row; the PDF itself lives on disk under the report
/// storage directory, keyed by `file_name`.
pub struct NewReport {
    pub name: String,
    pub report_type: String,
    pub period: String,
    pub description: Option<String>,
    pub file_name: String,
    pub file_size: i64,
    pub uploaded_by: Option<i32>,
}

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    /// Creates a new instance of [`ReportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, report: NewReport) -> Result<entity::report::Model, DbErr> {
        let report = entity::report::ActiveModel {
            name: ActiveValue::Set(report.name),
            report_type: ActiveValue::Set(report.report_type),
            period: ActiveValue::Set(report.period),
            description: ActiveValue::Set(report.description),
            file_name: ActiveValue::Set(report.file_name),
            file_size: ActiveValue::Set(report.file_size),
            uploaded_by: ActiveValue::Set(report.uploaded_by),
            download_count: ActiveValue::Set(0),
            last_accessed: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        report.insert(self.db).await
    }

    pub async fn get(&self, report_id: i32) -> Result<Option<entity::report::Model>, DbErr> {
        entity::prelude::Report::find_by_id(report_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::report::Model>, DbErr> {
        entity::prelude::Report::find()
            .order_by_desc(entity::report::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Bumps the download counter and access timestamp for a report.
    pub async fn record_download(&self, report_id: i32) -> Result<(), DbErr> {
        entity::prelude::Report::update_many()
            .col_expr(
                entity::report::Column::DownloadCount,
                Expr::col(entity::report::Column::DownloadCount).add(1),
            )
            .col_expr(
                entity::report::Column::LastAccessed,
                Expr::value(Some(Utc::now().naive_utc())),
            )
            .filter(entity::report::Column::Id.eq(report_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, report_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Report::delete_by_id(report_id)
            .exec(self.db)
            .await
    }
}
