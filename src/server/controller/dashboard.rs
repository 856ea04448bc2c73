use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{error::Error, model::app::AppState, service::dashboard::DashboardService},
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Aggregate figures for the dashboard landing page
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard aggregates", body = DashboardStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let stats = DashboardService::new(&state.db)
        .stats(state.expiry_warning_days)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
