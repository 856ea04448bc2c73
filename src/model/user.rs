use serde::{Deserialize, Serialize};

/// User profile as exposed by the API; password hashes never leave the server.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub rank: String,
    pub role: String,
    pub appointment: Option<String>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateUserDto {
    pub username: String,
    pub name: String,
    pub rank: String,
    pub role: String,
    pub appointment: Option<String>,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateUserDto {
    pub name: String,
    pub rank: String,
    pub role: String,
    pub appointment: Option<String>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChangePasswordDto {
    pub user_id: i32,
    pub current_password: String,
    pub new_password: String,
}
