use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::api::{ErrorDto, StatusDto},
    server::{error::Error, model::app::AppState},
};

pub static STATUS_TAG: &str = "status";

/// Health check: verifies database connectivity and reports server time
#[utoipa::path(
    get,
    path = "/api/status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service healthy", body = StatusDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn healthcheck(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    state.db.ping().await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "ok".to_string(),
            server_time: Utc::now().naive_utc(),
        }),
    ))
}
