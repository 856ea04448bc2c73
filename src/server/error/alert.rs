use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlertError {
    #[error("Alert ID {0} not found")]
    NotFound(i32),
    #[error("Alert cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },
    #[error("Unknown alert status {0:?}")]
    UnknownStatus(String),
}

impl IntoResponse for AlertError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Alert not found".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidTransition { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::UnknownStatus(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
