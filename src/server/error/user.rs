use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User ID {0} not found")]
    NotFound(i32),
    #[error("Current password does not match")]
    InvalidCredentials,
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
    /// Hashing or hash parsing failed; indicates a corrupt stored hash or an
    /// RNG failure, never user input.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid current password".to_string(),
                }),
            )
                .into_response(),
            Self::UsernameTaken(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
