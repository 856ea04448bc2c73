use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub report_type: String,
    pub period: String,
    pub description: Option<String>,
    pub file_name: String,
    pub file_size: i64,
    pub uploaded_by: Option<i32>,
    pub download_count: i32,
    pub last_accessed: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::arsenal_user::Entity",
        from = "Column::UploadedBy",
        to = "super::arsenal_user::Column::Id"
    )]
    ArsenalUser,
}

impl Related<super::arsenal_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArsenalUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
