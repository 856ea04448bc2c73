use arsenal::server::service::alert::AlertService;
use arsenal_test_utils::prelude::*;
use chrono::{Duration, Utc};
use entity::stock_alert::AlertStatus;

const WARNING_DAYS: i64 = 30;

/// Expect a low-stock alert for a lot under its threshold
#[tokio::test]
async fn raises_low_stock_alert_below_threshold() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("custodian").await?;
    test.inventory()
        .insert_stock_lot_detailed(user.id, 45, "LOT-A", None, Some(100))
        .await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    let created = service.evaluate().await?;

    assert_eq!(created, 1);

    let alerts = service.list_alerts(Some(AlertStatus::Open)).await?;
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].message.contains("45/100"));

    Ok(())
}

/// Expect no alert for a lot at or above its threshold, or with no threshold
#[tokio::test]
async fn quiet_for_healthy_lots() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("custodian").await?;
    test.inventory()
        .insert_stock_lot_detailed(user.id, 100, "LOT-A", None, Some(100))
        .await?;
    test.inventory()
        .insert_stock_lot(user.id, 0, "LOT-B")
        .await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    let created = service.evaluate().await?;

    assert_eq!(created, 0);

    Ok(())
}

/// Expect an expiry warning for a lot expiring inside the window, none for a
/// lot expiring later
#[tokio::test]
async fn raises_expiry_warning_within_window() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("custodian").await?;

    let today = Utc::now().date_naive();
    test.inventory()
        .insert_stock_lot_detailed(user.id, 100, "SOON", Some(today + Duration::days(10)), None)
        .await?;
    test.inventory()
        .insert_stock_lot_detailed(user.id, 100, "LATER", Some(today + Duration::days(60)), None)
        .await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    let created = service.evaluate().await?;

    assert_eq!(created, 1);

    let alerts = service.list_alerts(Some(AlertStatus::Open)).await?;
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].message.contains("SOON"));

    Ok(())
}

/// Expect repeated sweeps to raise nothing new while the alert is live
#[tokio::test]
async fn repeated_sweeps_do_not_duplicate() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("custodian").await?;
    test.inventory()
        .insert_stock_lot_detailed(user.id, 45, "LOT-A", None, Some(100))
        .await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    assert_eq!(service.evaluate().await?, 1);
    assert_eq!(service.evaluate().await?, 0);
    assert_eq!(service.evaluate().await?, 0);

    let alerts = service.list_alerts(None).await?;
    assert_eq!(alerts.len(), 1);

    Ok(())
}

/// Expect an acknowledged alert to keep suppressing duplicates
#[tokio::test]
async fn acknowledged_alert_still_suppresses() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("custodian").await?;
    test.inventory()
        .insert_stock_lot_detailed(user.id, 45, "LOT-A", None, Some(100))
        .await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    service.evaluate().await?;

    let alerts = service.list_alerts(Some(AlertStatus::Open)).await?;
    service.acknowledge(alerts[0].id, user.id).await?;

    assert_eq!(service.evaluate().await?, 0);

    Ok(())
}

/// Expect a resolved alert to free the slot so a persisting condition alerts
/// again on the next sweep
#[tokio::test]
async fn resolved_alert_allows_fresh_alert() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("custodian").await?;
    test.inventory()
        .insert_stock_lot_detailed(user.id, 45, "LOT-A", None, Some(100))
        .await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    service.evaluate().await?;

    let alerts = service.list_alerts(Some(AlertStatus::Open)).await?;
    service.resolve(alerts[0].id).await?;

    assert_eq!(service.evaluate().await?, 1);

    let alerts = service.list_alerts(None).await?;
    assert_eq!(alerts.len(), 2);

    Ok(())
}
