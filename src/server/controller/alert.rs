use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::stock_alert::AlertStatus;
use sea_orm::ActiveEnum;
use serde::Deserialize;

use crate::{
    model::{
        alert::{AcknowledgeAlertDto, AlertDto, AlertSweepDto},
        api::ErrorDto,
    },
    server::{
        error::{alert::AlertError, Error},
        model::{app::AppState, db::AlertModel},
        service::alert::AlertService,
    },
};

pub static ALERT_TAG: &str = "alert";

fn to_dto(alert: AlertModel) -> AlertDto {
    AlertDto {
        id: alert.id,
        inventory_stock_id: alert.inventory_stock_id,
        alert_type: alert.alert_type.to_value(),
        status: alert.status.to_value(),
        message: alert.message,
        acknowledged_by: alert.acknowledged_by,
        acknowledged_at: alert.acknowledged_at,
        created_at: alert.created_at,
    }
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct AlertListParams {
    /// Filter by status: open, acknowledged, dismissed, or resolved
    status: Option<String>,
}

/// List alerts, optionally filtered by status
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = ALERT_TAG,
    params(AlertListParams),
    responses(
        (status = 200, description = "Alerts, newest first", body = Vec<AlertDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(params): Query<AlertListParams>,
) -> Result<impl IntoResponse, Error> {
    let status = match params.status {
        Some(raw) => Some(
            AlertStatus::try_from_value(&raw).map_err(|_| AlertError::UnknownStatus(raw))?,
        ),
        None => None,
    };

    let alerts = AlertService::new(&state.db, state.expiry_warning_days)
        .list_alerts(status)
        .await?;

    let dtos: Vec<AlertDto> = alerts.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Run the alert sweep now instead of waiting for the scheduler
#[utoipa::path(
    post,
    path = "/api/alerts/evaluate",
    tag = ALERT_TAG,
    responses(
        (status = 200, description = "Sweep complete", body = AlertSweepDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn evaluate_alerts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let created = AlertService::new(&state.db, state.expiry_warning_days)
        .evaluate()
        .await?;

    Ok((StatusCode::OK, Json(AlertSweepDto { created })))
}

/// Acknowledge an open alert
#[utoipa::path(
    post,
    path = "/api/alerts/{id}/acknowledge",
    tag = ALERT_TAG,
    params(("id" = i32, Path, description = "Alert ID")),
    request_body = AcknowledgeAlertDto,
    responses(
        (status = 200, description = "Alert acknowledged", body = AlertDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 409, description = "Invalid status transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn acknowledge_alert(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<AcknowledgeAlertDto>,
) -> Result<impl IntoResponse, Error> {
    let alert = AlertService::new(&state.db, state.expiry_warning_days)
        .acknowledge(id, body.user_id)
        .await?;

    Ok((StatusCode::OK, Json(to_dto(alert))))
}

/// Dismiss an alert; a persisting condition may re-alert on the next sweep
#[utoipa::path(
    post,
    path = "/api/alerts/{id}/dismiss",
    tag = ALERT_TAG,
    params(("id" = i32, Path, description = "Alert ID")),
    responses(
        (status = 200, description = "Alert dismissed", body = AlertDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 409, description = "Invalid status transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dismiss_alert(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let alert = AlertService::new(&state.db, state.expiry_warning_days)
        .dismiss(id)
        .await?;

    Ok((StatusCode::OK, Json(to_dto(alert))))
}

/// Resolve an alert
#[utoipa::path(
    post,
    path = "/api/alerts/{id}/resolve",
    tag = ALERT_TAG,
    params(("id" = i32, Path, description = "Alert ID")),
    responses(
        (status = 200, description = "Alert resolved", body = AlertDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 409, description = "Invalid status transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let alert = AlertService::new(&state.db, state.expiry_warning_days)
        .resolve(id)
        .await?;

    Ok((StatusCode::OK, Json(to_dto(alert))))
}
