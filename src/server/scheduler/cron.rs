use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::server::{config::Config, service::alert::AlertService};

use super::config::alert_sweep;

/// Initialize and start the cron job scheduler
pub async fn start_scheduler(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<(), JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    let db_clone = db.clone();
    let expiry_warning_days = config.expiry_warning_days;

    sched
        .add(Job::new_async(
            alert_sweep::CRON_EXPRESSION,
            move |_, _| {
                let db = db_clone.clone();

                Box::pin(async move {
                    let alert_service = AlertService::new(&db, expiry_warning_days);

                    match alert_service.evaluate().await {
                        Ok(count) => {
                            tracing::info!("Alert sweep complete, {} new alert(s)", count)
                        }
                        Err(e) => tracing::error!("Error running alert sweep: {:?}", e),
                    }
                })
            },
        )?)
        .await?;

    sched.start().await?;

    Ok(())
}
