use arsenal::server::{
    error::{inventory::InventoryError, Error},
    service::inventory::InventoryService,
};
use arsenal_test_utils::prelude::*;

/// Expect repeated reads without intervening writes to return the same value
#[tokio::test]
async fn is_idempotent_without_writes() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("custodian").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 250, "LOT-A").await?;

    let service = InventoryService::new(&test.db);

    assert_eq!(service.get_quantity(lot.id).await?, 250);
    assert_eq!(service.get_quantity(lot.id).await?, 250);
    assert_eq!(service.get_quantity(lot.id).await?, 250);

    Ok(())
}

/// Expect NotFound for a lot that does not exist
#[tokio::test]
async fn fails_for_nonexistent_lot() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = InventoryService::new(&test.db);
    let result = service.get_quantity(999).await;

    assert!(matches!(
        result,
        Err(Error::InventoryError(InventoryError::NotFound(999)))
    ));

    Ok(())
}
