use chrono::Utc;
use entity::stock_alert::{AlertStatus, AlertType};
use migration::OnConflict;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct AlertRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlertRepository<'a, C> {
    /// Creates a new instance of [`AlertRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Raises an alert for a lot unless one of the same type is already live.
    ///
    /// Dedup is enforced by the unique index on `dedup_key`, not by a
    /// read-then-insert check: concurrent sweeps race on the constraint and
    /// the loser's insert is simply dropped.
    ///
    /// Returns `Ok(None)` when a live alert already covered the lot + type.
    pub async fn create_if_absent(
        &self,
        stock_id: i32,
        alert_type: AlertType,
        message: String,
    ) -> Result<Option<entity::stock_alert::Model>, DbErr> {
        let now = Utc::now().naive_utc();
        let dedup_key = format!("{}:{}", stock_id, alert_type.to_value());

        let alert = entity::stock_alert::ActiveModel {
            inventory_stock_id: ActiveValue::Set(stock_id),
            alert_type: ActiveValue::Set(alert_type),
            status: ActiveValue::Set(AlertStatus::Open),
            message: ActiveValue::Set(message),
            dedup_key: ActiveValue::Set(Some(dedup_key)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = entity::prelude::StockAlert::insert(alert)
            .on_conflict(
                OnConflict::column(entity::stock_alert::Column::DedupKey)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await;

        match result {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get(&self, alert_id: i32) -> Result<Option<entity::stock_alert::Model>, DbErr> {
        entity::prelude::StockAlert::find_by_id(alert_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(
        &self,
        status: Option<AlertStatus>,
    ) -> Result<Vec<entity::stock_alert::Model>, DbErr> {
        let mut query = entity::prelude::StockAlert::find()
            .order_by_desc(entity::stock_alert::Column::CreatedAt);

        if let Some(status) = status {
            query = query.filter(entity::stock_alert::Column::Status.eq(status));
        }

        query.all(self.db).await
    }

    /// Moves an alert into a new status.
    ///
    /// Dismissed/resolved alerts give up their dedup key so a persisting
    /// condition can raise a fresh alert on the next sweep.
    pub async fn set_status(
        &self,
        alert: entity::stock_alert::Model,
        status: AlertStatus,
        acknowledged_by: Option<i32>,
    ) -> Result<entity::stock_alert::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut alert_am = alert.into_active_model();
        alert_am.status = ActiveValue::Set(status.clone());
        alert_am.updated_at = ActiveValue::Set(now);

        if matches!(status, AlertStatus::Dismissed | AlertStatus::Resolved) {
            alert_am.dedup_key = ActiveValue::Set(None);
        }

        if let Some(user_id) = acknowledged_by {
            alert_am.acknowledged_by = ActiveValue::Set(Some(user_id));
            alert_am.acknowledged_at = ActiveValue::Set(Some(now));
        }

        alert_am.update(self.db).await
    }
}
