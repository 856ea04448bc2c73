use arsenal::server::{
    error::{alert::AlertError, Error},
    service::alert::AlertService,
};
use arsenal_test_utils::prelude::*;
use entity::stock_alert::AlertStatus;

const WARNING_DAYS: i64 = 30;

async fn setup_with_open_alert(test: &TestContext) -> Result<i32, TestError> {
    let user = test.user().insert_user("custodian").await?;
    test.inventory()
        .insert_stock_lot_detailed(user.id, 45, "LOT-A", None, Some(100))
        .await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    service.evaluate().await.expect("sweep failed");

    let alerts = service
        .list_alerts(Some(AlertStatus::Open))
        .await
        .expect("listing failed");

    Ok(alerts[0].id)
}

/// Expect Open -> Acknowledged to record the acknowledging user
#[tokio::test]
async fn acknowledges_open_alert() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let alert_id = setup_with_open_alert(&test).await?;
    let user = test.user().insert_user("officer").await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    let alert = service.acknowledge(alert_id, user.id).await.unwrap();

    assert_eq!(alert.status, AlertStatus::Acknowledged);
    assert_eq!(alert.acknowledged_by, Some(user.id));

    Ok(())
}

/// Expect Acknowledged -> Resolved to be allowed
#[tokio::test]
async fn resolves_acknowledged_alert() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let alert_id = setup_with_open_alert(&test).await?;
    let user = test.user().insert_user("officer").await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    service.acknowledge(alert_id, user.id).await.unwrap();
    let alert = service.resolve(alert_id).await.unwrap();

    assert_eq!(alert.status, AlertStatus::Resolved);

    Ok(())
}

/// Expect a terminal alert to reject further transitions
#[tokio::test]
async fn rejects_transition_out_of_resolved() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let alert_id = setup_with_open_alert(&test).await?;
    let user = test.user().insert_user("officer").await?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    service.resolve(alert_id).await.unwrap();

    let result = service.acknowledge(alert_id, user.id).await;

    assert!(matches!(
        result,
        Err(Error::AlertError(AlertError::InvalidTransition { .. }))
    ));

    Ok(())
}

/// Expect NotFound for an alert that does not exist
#[tokio::test]
async fn fails_for_nonexistent_alert() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = AlertService::new(&test.db, WARNING_DAYS);
    let result = service.dismiss(999).await;

    assert!(matches!(
        result,
        Err(Error::AlertError(AlertError::NotFound(999)))
    ));

    Ok(())
}
