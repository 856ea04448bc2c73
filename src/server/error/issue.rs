use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IssueError {
    #[error("Issue ID {0} not found")]
    NotFound(i32),
    /// Rejected before any storage access.
    #[error("issue_quantity must be a positive integer")]
    InvalidQuantity(i32),
}

impl IntoResponse for IssueError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Issue not found".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidQuantity(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
