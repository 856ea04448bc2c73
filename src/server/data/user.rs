use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserDto, UpdateUserDto};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user; `password_hash` is an argon2 PHC string, never the
    /// plaintext password.
    pub async fn create(
        &self,
        user: &CreateUserDto,
        password_hash: String,
    ) -> Result<entity::arsenal_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::arsenal_user::ActiveModel {
            username: ActiveValue::Set(user.username.clone()),
            name: ActiveValue::Set(user.name.clone()),
            rank: ActiveValue::Set(user.rank.clone()),
            role: ActiveValue::Set(user.role.clone()),
            appointment: ActiveValue::Set(user.appointment.clone()),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::arsenal_user::Model>, DbErr> {
        entity::prelude::ArsenalUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::arsenal_user::Model>, DbErr> {
        entity::prelude::ArsenalUser::find()
            .order_by_asc(entity::arsenal_user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::arsenal_user::Model>, DbErr> {
        entity::prelude::ArsenalUser::find()
            .filter(entity::arsenal_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Updates profile fields; username and password are changed through
    /// their own paths.
    pub async fn update(
        &self,
        user_id: i32,
        user: &UpdateUserDto,
    ) -> Result<Option<entity::arsenal_user::Model>, DbErr> {
        let existing = match entity::prelude::ArsenalUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut user_am = existing.into_active_model();
        user_am.name = ActiveValue::Set(user.name.clone());
        user_am.rank = ActiveValue::Set(user.rank.clone());
        user_am.role = ActiveValue::Set(user.role.clone());
        user_am.appointment = ActiveValue::Set(user.appointment.clone());
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    pub async fn update_password_hash(
        &self,
        user: entity::arsenal_user::Model,
        password_hash: String,
    ) -> Result<entity::arsenal_user::Model, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_am.update(self.db).await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ArsenalUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
