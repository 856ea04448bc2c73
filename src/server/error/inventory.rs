use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Stock lot ID {0} not found")]
    NotFound(i32),
    /// Requested issue quantity exceeds what the lot currently holds. This is
    /// a business-rule rejection, not a system fault; the transaction that
    /// detects it rolls back cleanly.
    #[error("Not enough quantity in inventory")]
    InsufficientStock { stock_id: i32, requested: i32 },
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Item not found".to_string(),
                }),
            )
                .into_response(),
            Self::InsufficientStock {
                stock_id,
                requested,
            } => {
                tracing::debug!(
                    stock_id = %stock_id,
                    requested = %requested,
                    "issue rejected, insufficient stock"
                );

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Not enough quantity in inventory".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
