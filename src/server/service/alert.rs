//! Alert derivation and lifecycle.
//!
//! Alerts are derived from stock lot state, never pushed by the issue
//! workflow: the sweep in [`AlertService::evaluate`] runs on a schedule (and
//! on demand) and compares each lot against its threshold and expiry date.

use chrono::Utc;
use dioxus_logger::tracing;
use entity::stock_alert::{AlertStatus, AlertType};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{alert::AlertRepository, inventory::InventoryRepository},
    error::{alert::AlertError, Error},
};

pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
    expiry_warning_days: i64,
}

impl<'a> AlertService<'a> {
    /// Creates a new instance of [`AlertService`]
    pub fn new(db: &'a DatabaseConnection, expiry_warning_days: i64) -> Self {
        Self {
            db,
            expiry_warning_days,
        }
    }

    /// Sweeps every stock lot and raises alerts for threshold and expiry
    /// violations.
    ///
    /// Idempotent: a lot + type pair with a live alert is skipped via the
    /// dedup-key constraint, so running the sweep twice (or concurrently)
    /// never duplicates a notification.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of new alerts raised by this sweep
    pub async fn evaluate(&self) -> Result<u64, Error> {
        let lots = InventoryRepository::new(self.db).get_all().await?;
        let alert_repo = AlertRepository::new(self.db);
        let today = Utc::now().date_naive();

        let mut created = 0u64;

        for lot in lots {
            if let Some(threshold) = lot.min_threshold {
                if lot.quantity < threshold {
                    let message = format!(
                        "Lot {} below minimum threshold ({}/{})",
                        lot.lot_number, lot.quantity, threshold
                    );

                    if alert_repo
                        .create_if_absent(lot.id, AlertType::LowStock, message)
                        .await?
                        .is_some()
                    {
                        created += 1;
                    }
                }
            }

            if let Some(expiry_date) = lot.expiry_date {
                let days_left = (expiry_date - today).num_days();

                if days_left <= self.expiry_warning_days {
                    let message = if days_left < 0 {
                        format!("Lot {} expired on {}", lot.lot_number, expiry_date)
                    } else {
                        format!(
                            "Lot {} expires in {} days ({})",
                            lot.lot_number, days_left, expiry_date
                        )
                    };

                    if alert_repo
                        .create_if_absent(lot.id, AlertType::ExpiryWarning, message)
                        .await?
                        .is_some()
                    {
                        created += 1;
                    }
                }
            }
        }

        if created > 0 {
            tracing::info!("Raised {} new stock alert(s)", created);
        }

        Ok(created)
    }

    pub async fn list_alerts(
        &self,
        status: Option<AlertStatus>,
    ) -> Result<Vec<entity::stock_alert::Model>, Error> {
        Ok(AlertRepository::new(self.db).get_all(status).await?)
    }

    /// Open → Acknowledged, recording who acknowledged and when.
    pub async fn acknowledge(
        &self,
        alert_id: i32,
        user_id: i32,
    ) -> Result<entity::stock_alert::Model, Error> {
        self.transition(alert_id, AlertStatus::Acknowledged, Some(user_id))
            .await
    }

    /// Open/Acknowledged → Dismissed. Frees the dedup key.
    pub async fn dismiss(&self, alert_id: i32) -> Result<entity::stock_alert::Model, Error> {
        self.transition(alert_id, AlertStatus::Dismissed, None).await
    }

    /// Open/Acknowledged → Resolved. Frees the dedup key.
    pub async fn resolve(&self, alert_id: i32) -> Result<entity::stock_alert::Model, Error> {
        self.transition(alert_id, AlertStatus::Resolved, None).await
    }

    async fn transition(
        &self,
        alert_id: i32,
        to: AlertStatus,
        acknowledged_by: Option<i32>,
    ) -> Result<entity::stock_alert::Model, Error> {
        let alert_repo = AlertRepository::new(self.db);

        let alert = alert_repo
            .get(alert_id)
            .await?
            .ok_or(AlertError::NotFound(alert_id))?;

        let allowed = matches!(
            (&alert.status, &to),
            (AlertStatus::Open, AlertStatus::Acknowledged)
                | (AlertStatus::Open, AlertStatus::Dismissed)
                | (AlertStatus::Open, AlertStatus::Resolved)
                | (AlertStatus::Acknowledged, AlertStatus::Dismissed)
                | (AlertStatus::Acknowledged, AlertStatus::Resolved)
        );

        if !allowed {
            return Err(AlertError::InvalidTransition {
                from: alert.status.to_value(),
                to: to.to_value(),
            }
            .into());
        }

        Ok(alert_repo.set_status(alert, to, acknowledged_by).await?)
    }
}
