//! Error types for the arsenal server application.
//!
//! Each domain (inventory, issues, alerts, users, reports, configuration) has
//! its own `thiserror` enum with an `IntoResponse` impl mapping it to the
//! right HTTP status. The top-level [`Error`] aggregates them plus external
//! library errors, so handlers and services can use `?` throughout.

pub mod alert;
pub mod config;
pub mod inventory;
pub mod issue;
pub mod report;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        alert::AlertError, config::ConfigError, inventory::InventoryError, issue::IssueError,
        report::ReportError, user::UserError,
    },
};

/// Main error type for the arsenal server application.
///
/// Aggregates all domain-specific error types and external library errors
/// into a single unified error type. `#[from]` conversions let the `?`
/// operator lift domain and database errors anywhere in the server stack;
/// the `IntoResponse` impl turns them into API responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Stock lot error (missing lot, insufficient quantity).
    #[error(transparent)]
    InventoryError(#[from] InventoryError),
    /// Issue record error (validation, missing record).
    #[error(transparent)]
    IssueError(#[from] IssueError),
    /// Alert error (missing alert, invalid status transition).
    #[error(transparent)]
    AlertError(#[from] AlertError),
    /// User error (missing user, bad credentials, duplicate username).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Report error (missing report, bad upload, file storage).
    #[error(transparent)]
    ReportError(#[from] ReportError),
    /// Database error (query failures, connection issues, constraint violations).
    ///
    /// Inside the issue-creation transaction this is only surfaced after the
    /// whole unit has rolled back; callers never observe a partial write.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::InventoryError(err) => err.into_response(),
            Self::IssueError(err) => err.into_response(),
            Self::AlertError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::ReportError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
