//! Tests for the get_inventory_item endpoint.

use arsenal::server::{controller::inventory::get_inventory_item, model::app::AppState};
use arsenal_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Expect 200 OK for an existing lot
#[tokio::test]
async fn returns_200_for_existing_lot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user = test.user().insert_user("custodian").await?;
    let lot = test.inventory().insert_stock_lot(user.id, 100, "LOT-A").await?;

    let state: AppState = test.to_app_state();
    let result = get_inventory_item(State(state), Path(lot.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a lot that does not exist
#[tokio::test]
async fn returns_404_for_missing_lot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let state: AppState = test.to_app_state();
    let result = get_inventory_item(State(state), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
