use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        issue::{CreateIssueDto, IssueCreatedDto, IssueDetailDto, IssueDto},
    },
    server::{
        data::issue::IssueJoinedRow,
        error::Error,
        model::{app::AppState, db::IssueModel},
        service::issue::IssueService,
    },
};

pub static ISSUE_TAG: &str = "issue";

fn to_dto(issue: IssueModel) -> IssueDto {
    IssueDto {
        id: issue.id,
        inventory_stock_id: issue.inventory_stock_id,
        user_id: issue.user_id,
        issue_date: issue.issue_date,
        issue_quantity: issue.issue_quantity,
        type_line_id: issue.type_line_id,
    }
}

fn to_detail_dto(row: IssueJoinedRow) -> IssueDetailDto {
    IssueDetailDto {
        id: row.id,
        inventory_stock_id: row.inventory_stock_id,
        user_id: row.user_id,
        issue_date: row.issue_date,
        issue_quantity: row.issue_quantity,
        type_line_id: row.type_line_id,
        lot_number: row.lot_number,
        lot_quantity: row.lot_quantity,
        requester_name: row.requester_name,
        caliber: row.caliber,
    }
}

/// Get all issues, newest issue date first
#[utoipa::path(
    get,
    path = "/api/issues",
    tag = ISSUE_TAG,
    responses(
        (status = 200, description = "All issues", body = Vec<IssueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issues(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let issues = IssueService::new(&state.db).list_issues().await?;

    let dtos: Vec<IssueDto> = issues.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get all issues joined with lot, requester, and type line columns
#[utoipa::path(
    get,
    path = "/api/issues/joined",
    tag = ISSUE_TAG,
    responses(
        (status = 200, description = "All issues with related columns", body = Vec<IssueDetailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issues_joined(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let rows = IssueService::new(&state.db).list_issues_joined().await?;

    let dtos: Vec<IssueDetailDto> = rows.into_iter().map(to_detail_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single issue by ID
#[utoipa::path(
    get,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "The issue", body = IssueDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let issue = IssueService::new(&state.db).get_issue(id).await?;

    Ok((StatusCode::OK, Json(to_dto(issue))))
}

/// Create an issue, atomically decrementing the lot's quantity
///
/// The insert and the decrement commit together or not at all; a concurrent
/// issue that drains the lot first causes this request to fail with 409
/// rather than oversell stock.
#[utoipa::path(
    post,
    path = "/api/issues",
    tag = ISSUE_TAG,
    request_body = CreateIssueDto,
    responses(
        (status = 201, description = "Issue created", body = IssueCreatedDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Stock lot not found", body = ErrorDto),
        (status = 409, description = "Not enough quantity in inventory", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_issue(
    State(state): State<AppState>,
    Json(issue): Json<CreateIssueDto>,
) -> Result<impl IntoResponse, Error> {
    let issue_id = IssueService::new(&state.db).create_issue(&issue).await?;

    Ok((
        StatusCode::CREATED,
        Json(IssueCreatedDto {
            issue_id,
            message: "Issue created".to_string(),
        }),
    ))
}

/// Update an issue record
///
/// Does not adjust the lot's on-hand quantity; issue history and inventory
/// are edited independently.
#[utoipa::path(
    put,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    request_body = CreateIssueDto,
    responses(
        (status = 200, description = "Issue updated", body = MessageDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(issue): Json<CreateIssueDto>,
) -> Result<impl IntoResponse, Error> {
    IssueService::new(&state.db).update_issue(id, &issue).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Issue updated successfully".to_string(),
        }),
    ))
}

/// Delete an issue record
///
/// Does not return the issued quantity to the lot.
#[utoipa::path(
    delete,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "Issue deleted", body = MessageDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    IssueService::new(&state.db).delete_issue(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Issue deleted successfully".to_string(),
        }),
    ))
}
