//! Tests for the transactional issue-creation workflow.
//!
//! This is the one operation in the system with a hard consistency
//! requirement: the issue insert and the stock decrement must commit together
//! or not at all, and concurrent issuers must never drive a lot negative.

use arsenal::{
    model::issue::CreateIssueDto,
    server::{
        error::{inventory::InventoryError, issue::IssueError, Error},
        service::issue::IssueService,
    },
};
use arsenal_test_utils::prelude::*;
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};

fn issue_dto(inventory_stock_id: i32, user_id: i32, issue_quantity: i32) -> CreateIssueDto {
    CreateIssueDto {
        inventory_stock_id,
        user_id,
        issue_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        issue_quantity,
        type_line_id: None,
    }
}

/// Expect success with the lot drained to exactly zero when the full quantity
/// is issued, and the issue row to exist with the issued amount
#[tokio::test]
async fn records_issue_and_decrements_stock() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 500, "LOT-A").await?;

    let service = IssueService::new(&test.db);
    let result = service.create_issue(&issue_dto(lot.id, user.id, 500)).await;

    assert!(result.is_ok());
    let issue_id = result.unwrap();

    let issue = entity::prelude::Issue::find_by_id(issue_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(issue.issue_quantity, 500);

    let lot = entity::prelude::InventoryStock::find_by_id(lot.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(lot.quantity, 0);

    Ok(())
}

/// Expect a follow-up issue against a drained lot to fail with
/// InsufficientStock
#[tokio::test]
async fn rejects_issue_against_drained_lot() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 500, "LOT-A").await?;

    let service = IssueService::new(&test.db);
    service
        .create_issue(&issue_dto(lot.id, user.id, 500))
        .await
        .unwrap();

    let result = service.create_issue(&issue_dto(lot.id, user.id, 1)).await;

    assert!(matches!(
        result,
        Err(Error::InventoryError(
            InventoryError::InsufficientStock { .. }
        ))
    ));

    Ok(())
}

/// Expect InsufficientStock with no writes at all when the request exceeds
/// the on-hand quantity
#[tokio::test]
async fn rejects_oversized_issue_without_writes() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 50, "LOT-A").await?;

    let service = IssueService::new(&test.db);
    let result = service.create_issue(&issue_dto(lot.id, user.id, 51)).await;

    assert!(matches!(
        result,
        Err(Error::InventoryError(
            InventoryError::InsufficientStock { .. }
        ))
    ));

    let lot = entity::prelude::InventoryStock::find_by_id(lot.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(lot.quantity, 50);

    let issue_count = entity::prelude::Issue::find().count(&test.db).await?;
    assert_eq!(issue_count, 0);

    Ok(())
}

/// Expect NotFound and no writes for a lot that does not exist
#[tokio::test]
async fn rejects_missing_lot_without_writes() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("requester").await?;

    let service = IssueService::new(&test.db);
    let result = service.create_issue(&issue_dto(999, user.id, 1)).await;

    assert!(matches!(
        result,
        Err(Error::InventoryError(InventoryError::NotFound(999)))
    ));

    let issue_count = entity::prelude::Issue::find().count(&test.db).await?;
    assert_eq!(issue_count, 0);

    Ok(())
}

/// Expect zero and negative quantities to be rejected before any storage
/// access; the context has no tables, so a storage touch would error
/// differently
#[tokio::test]
async fn rejects_non_positive_quantity_before_storage() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let service = IssueService::new(&test.db);

    let result = service.create_issue(&issue_dto(1, 1, 0)).await;
    assert!(matches!(
        result,
        Err(Error::IssueError(IssueError::InvalidQuantity(0)))
    ));

    let result = service.create_issue(&issue_dto(1, 1, -5)).await;
    assert!(matches!(
        result,
        Err(Error::IssueError(IssueError::InvalidQuantity(-5)))
    ));

    Ok(())
}

/// Expect exactly one of two concurrent issues of 80 against a lot of 100 to
/// succeed: the loser rolls back its insert, the final quantity is 20, and
/// exactly one issue row exists. Never a lost update, never a double
/// decrement, never a negative quantity.
#[tokio::test]
async fn concurrent_issues_cannot_oversell_stock() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

    let service = IssueService::new(&test.db);

    let first_dto = issue_dto(lot.id, user.id, 80);
    let second_dto = issue_dto(lot.id, user.id, 80);
    let first = service.create_issue(&first_dto);
    let second = service.create_issue(&second_dto);

    let (first, second) = tokio::join!(first, second);

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);

    let failure = [first, second].into_iter().find(|r| r.is_err()).unwrap();
    assert!(matches!(
        failure,
        Err(Error::InventoryError(
            InventoryError::InsufficientStock { .. }
        ))
    ));

    let lot = entity::prelude::InventoryStock::find_by_id(lot.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(lot.quantity, 20);

    let issue_count = entity::prelude::Issue::find().count(&test.db).await?;
    assert_eq!(issue_count, 1);

    Ok(())
}

/// Expect two sequential issues that fit the lot to both succeed and the
/// decrements to accumulate
#[tokio::test]
async fn sequential_issues_accumulate() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

    let service = IssueService::new(&test.db);
    service
        .create_issue(&issue_dto(lot.id, user.id, 30))
        .await
        .unwrap();
    service
        .create_issue(&issue_dto(lot.id, user.id, 45))
        .await
        .unwrap();

    let lot = entity::prelude::InventoryStock::find_by_id(lot.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(lot.quantity, 25);

    let issue_count = entity::prelude::Issue::find().count(&test.db).await?;
    assert_eq!(issue_count, 2);

    Ok(())
}
