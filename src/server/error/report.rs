use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report ID {0} not found")]
    NotFound(i32),
    #[error("Please upload a PDF file only")]
    NotAPdf,
    #[error("Multipart upload is missing the file field")]
    MissingFile,
    #[error("Multipart field {field}: {reason}")]
    MalformedField { field: String, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Report not found".to_string(),
                }),
            )
                .into_response(),
            Self::NotAPdf | Self::MissingFile | Self::MalformedField { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Io(_) => InternalServerError(self).into_response(),
        }
    }
}
