//! Tests for the create_issue endpoint's HTTP status mapping.

use arsenal::{
    model::issue::CreateIssueDto,
    server::{controller::issue::create_issue, model::app::AppState},
};
use arsenal_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;

fn issue_dto(inventory_stock_id: i32, user_id: i32, issue_quantity: i32) -> CreateIssueDto {
    CreateIssueDto {
        inventory_stock_id,
        user_id,
        issue_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        issue_quantity,
        type_line_id: None,
    }
}

/// Expect 201 Created when the issue fits the lot
#[tokio::test]
async fn returns_201_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

    let state: AppState = test.to_app_state();
    let result = create_issue(State(state), Json(issue_dto(lot.id, user.id, 10))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request for a non-positive quantity
#[tokio::test]
async fn returns_400_for_invalid_quantity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

    let state: AppState = test.to_app_state();
    let result = create_issue(State(state), Json(issue_dto(lot.id, user.id, 0))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for a lot that does not exist
#[tokio::test]
async fn returns_404_for_missing_lot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user("requester").await?;

    let state: AppState = test.to_app_state();
    let result = create_issue(State(state), Json(issue_dto(999, user.id, 10))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 Conflict when the lot holds less than the requested quantity
#[tokio::test]
async fn returns_409_when_stock_insufficient() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user("requester").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 50, "LOT-A").await?;

    let state: AppState = test.to_app_state();
    let result = create_issue(State(state), Json(issue_dto(lot.id, user.id, 51))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
