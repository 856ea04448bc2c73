use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Read-only access to the ammunition type line reference table.
pub struct TypeLineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TypeLineRepository<'a, C> {
    /// Creates a new instance of [`TypeLineRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::ammo_type_line::Model>, DbErr> {
        entity::prelude::AmmoTypeLine::find()
            .order_by_asc(entity::ammo_type_line::Column::Id)
            .all(self.db)
            .await
    }
}
