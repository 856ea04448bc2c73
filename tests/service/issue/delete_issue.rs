use arsenal::{
    model::issue::CreateIssueDto,
    server::{
        error::{issue::IssueError, Error},
        service::issue::IssueService,
    },
};
use arsenal_test_utils::prelude::*;
use chrono::NaiveDate;
use sea_orm::EntityTrait;

fn issue_dto(inventory_stock_id: i32, user_id: i32, issue_quantity: i32) -> CreateIssueDto {
    CreateIssueDto {
        inventory_stock_id,
        user_id,
        issue_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        issue_quantity,
        type_line_id: None,
    }
}

/// Expect deleting an issue to leave the lot's quantity untouched; deleted
/// issue history does not give stock back.
#[tokio::test]
async fn does_not_restore_stock() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

    let service = IssueService::new(&test.db);
    let issue_id = service
        .create_issue(&issue_dto(lot.id, user.id, 40))
        .await
        .unwrap();

    service.delete_issue(issue_id).await?;

    let issue = entity::prelude::Issue::find_by_id(issue_id)
        .one(&test.db)
        .await?;
    assert!(issue.is_none());

    let lot = entity::prelude::InventoryStock::find_by_id(lot.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(lot.quantity, 60);

    Ok(())
}

/// Expect NotFound when deleting an issue that does not exist
#[tokio::test]
async fn fails_for_nonexistent_issue() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = IssueService::new(&test.db);
    let result = service.delete_issue(999).await;

    assert!(matches!(
        result,
        Err(Error::IssueError(IssueError::NotFound(999)))
    ));

    Ok(())
}
