use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, TestContext};

/// Inserts user rows with hashed passwords, matching what the application
/// writes in production.
pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { db: &self.db }
    }
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the standard test password.
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user_with_password(username, TEST_PASSWORD).await
    }

    /// Insert a user with a specific password.
    pub async fn insert_user_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        let user = entity::arsenal_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            name: ActiveValue::Set(format!("Test {}", username)),
            rank: ActiveValue::Set("Sergeant".to_string()),
            role: ActiveValue::Set("NCO".to_string()),
            appointment: ActiveValue::Set(None),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }
}
