//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! collected into a unified document served by Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Handlers sharing a path are registered in one `routes!` call so their
/// methods combine on a single route entry.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, ready to be merged
/// into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Arsenal", description = "Arsenal API"), tags(
        (name = controller::status::STATUS_TAG, description = "Health check routes"),
        (name = controller::inventory::INVENTORY_TAG, description = "Stock lot API routes"),
        (name = controller::issue::ISSUE_TAG, description = "Ammunition issue API routes"),
        (name = controller::alert::ALERT_TAG, description = "Stock alert API routes"),
        (name = controller::user::USER_TAG, description = "User management API routes"),
        (name = controller::report::REPORT_TAG, description = "Report upload/download API routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard aggregate routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::status::healthcheck))
        .routes(routes!(
            controller::inventory::get_inventory,
            controller::inventory::create_inventory_item
        ))
        .routes(routes!(
            controller::inventory::get_inventory_item,
            controller::inventory::update_inventory_item,
            controller::inventory::delete_inventory_item
        ))
        .routes(routes!(controller::inventory::get_ammo_type_lines))
        .routes(routes!(
            controller::issue::get_issues,
            controller::issue::create_issue
        ))
        .routes(routes!(controller::issue::get_issues_joined))
        .routes(routes!(
            controller::issue::get_issue,
            controller::issue::update_issue,
            controller::issue::delete_issue
        ))
        .routes(routes!(controller::alert::get_alerts))
        .routes(routes!(controller::alert::evaluate_alerts))
        .routes(routes!(controller::alert::acknowledge_alert))
        .routes(routes!(controller::alert::dismiss_alert))
        .routes(routes!(controller::alert::resolve_alert))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::change_password))
        .routes(routes!(
            controller::report::get_reports,
            controller::report::upload_report
        ))
        .routes(routes!(controller::report::download_report))
        .routes(routes!(controller::report::delete_report))
        .routes(routes!(controller::dashboard::get_dashboard_stats))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
