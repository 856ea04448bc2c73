use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        user::{ChangePasswordDto, CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, db::UserModel},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

fn to_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username,
        name: user.name,
        rank: user.rank,
        role: user.role,
        appointment: user.appointment,
    }
}

/// Get all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list_users().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a user; the password is stored as a salted hash
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = CreatedDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            id: user.id,
            message: "User created successfully".to_string(),
        }),
    ))
}

/// Update a user's profile fields
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(user): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).update_user(id, &user).await?;

    Ok((StatusCode::OK, Json(to_dto(user))))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete_user(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted successfully".to_string(),
        }),
    ))
}

/// Change a user's password after verifying the current one
#[utoipa::path(
    post,
    path = "/api/users/change-password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 401, description = "Current password mismatch", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    Json(change): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).change_password(&change).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password updated successfully".to_string(),
        }),
    ))
}
