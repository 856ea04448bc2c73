use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    FromQueryResult, IntoActiveModel, JoinType, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::issue::CreateIssueDto;

/// Issue row joined with its stock lot, requester, and type line so the
/// issues table can render human-readable columns in one query.
#[derive(Debug, FromQueryResult)]
pub struct IssueJoinedRow {
    pub id: i32,
    pub inventory_stock_id: i32,
    pub user_id: i32,
    pub issue_date: chrono::NaiveDate,
    pub issue_quantity: i32,
    pub type_line_id: Option<i32>,
    pub lot_number: Option<String>,
    pub lot_quantity: Option<i32>,
    pub requester_name: Option<String>,
    pub caliber: Option<String>,
}

pub struct IssueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IssueRepository<'a, C> {
    /// Creates a new instance of [`IssueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an issue row.
    ///
    /// Only the issue-creation workflow calls this, on the same transaction
    /// as the paired stock decrement.
    pub async fn create(&self, issue: &CreateIssueDto) -> Result<entity::issue::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let issue = entity::issue::ActiveModel {
            inventory_stock_id: ActiveValue::Set(issue.inventory_stock_id),
            user_id: ActiveValue::Set(issue.user_id),
            issue_date: ActiveValue::Set(issue.issue_date),
            issue_quantity: ActiveValue::Set(issue.issue_quantity),
            type_line_id: ActiveValue::Set(issue.type_line_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        issue.insert(self.db).await
    }

    pub async fn get(&self, issue_id: i32) -> Result<Option<entity::issue::Model>, DbErr> {
        entity::prelude::Issue::find_by_id(issue_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::issue::Model>, DbErr> {
        entity::prelude::Issue::find()
            .order_by_desc(entity::issue::Column::IssueDate)
            .all(self.db)
            .await
    }

    pub async fn get_all_joined(&self) -> Result<Vec<IssueJoinedRow>, DbErr> {
        entity::prelude::Issue::find()
            .column_as(entity::inventory_stock::Column::LotNumber, "lot_number")
            .column_as(entity::inventory_stock::Column::Quantity, "lot_quantity")
            .column_as(entity::arsenal_user::Column::Name, "requester_name")
            .column_as(entity::ammo_type_line::Column::Caliber, "caliber")
            .join(JoinType::LeftJoin, entity::issue::Relation::InventoryStock.def())
            .join(JoinType::LeftJoin, entity::issue::Relation::ArsenalUser.def())
            .join(JoinType::LeftJoin, entity::issue::Relation::AmmoTypeLine.def())
            .order_by_desc(entity::issue::Column::IssueDate)
            .into_model::<IssueJoinedRow>()
            .all(self.db)
            .await
    }

    /// Replaces the editable fields of an issue row.
    ///
    /// Deliberately does not touch the stock lot's quantity; issue history
    /// and inventory are independently editable records.
    pub async fn update(
        &self,
        issue_id: i32,
        issue: &CreateIssueDto,
    ) -> Result<Option<entity::issue::Model>, DbErr> {
        let existing = match entity::prelude::Issue::find_by_id(issue_id).one(self.db).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut issue_am = existing.into_active_model();
        issue_am.inventory_stock_id = ActiveValue::Set(issue.inventory_stock_id);
        issue_am.user_id = ActiveValue::Set(issue.user_id);
        issue_am.issue_date = ActiveValue::Set(issue.issue_date);
        issue_am.issue_quantity = ActiveValue::Set(issue.issue_quantity);
        issue_am.type_line_id = ActiveValue::Set(issue.type_line_id);
        issue_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let updated = issue_am.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes an issue row; the stock lot's quantity is left as-is.
    pub async fn delete(&self, issue_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Issue::delete_by_id(issue_id).exec(self.db).await
    }
}
