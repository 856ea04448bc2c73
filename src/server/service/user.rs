//! User account management.
//!
//! Passwords are stored as salted argon2 hashes; the change-password flow
//! verifies the current password against the stored hash before re-hashing
//! the new one. Plaintext never touches the database.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{ChangePasswordDto, CreateUserDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_users(&self) -> Result<Vec<entity::arsenal_user::Model>, Error> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_user(&self, user_id: i32) -> Result<entity::arsenal_user::Model, Error> {
        UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(user_id).into())
    }

    /// Creates a user with a hashed password. Fails with `UsernameTaken`
    /// before hashing when the username is in use.
    pub async fn create_user(
        &self,
        user: &CreateUserDto,
    ) -> Result<entity::arsenal_user::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&user.username).await?.is_some() {
            return Err(UserError::UsernameTaken(user.username.clone()).into());
        }

        let password_hash = hash_password(&user.password)?;

        Ok(user_repo.create(user, password_hash).await?)
    }

    pub async fn update_user(
        &self,
        user_id: i32,
        user: &UpdateUserDto,
    ) -> Result<entity::arsenal_user::Model, Error> {
        UserRepository::new(self.db)
            .update(user_id, user)
            .await?
            .ok_or_else(|| UserError::NotFound(user_id).into())
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<(), Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(user_id).into());
        }

        Ok(())
    }

    /// Verifies the current password against the stored hash, then stores a
    /// hash of the new one.
    ///
    /// # Returns
    /// - `Ok(())`: Password updated
    /// - `Err(Error::UserError(NotFound))`: No such user
    /// - `Err(Error::UserError(InvalidCredentials))`: Current password mismatch
    pub async fn change_password(&self, change: &ChangePasswordDto) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get(change.user_id)
            .await?
            .ok_or(UserError::NotFound(change.user_id))?;

        if !verify_password(&change.current_password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials.into());
        }

        let password_hash = hash_password(&change.new_password)?;
        user_repo.update_password_hash(user, password_hash).await?;

        Ok(())
    }
}

/// Hash a password into an argon2 PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, UserError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Verify a password against a stored PHC string.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, UserError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
