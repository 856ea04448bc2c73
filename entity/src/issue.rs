use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "issue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inventory_stock_id: i32,
    pub user_id: i32,
    pub issue_date: Date,
    pub issue_quantity: i32,
    pub type_line_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory_stock::Entity",
        from = "Column::InventoryStockId",
        to = "super::inventory_stock::Column::Id"
    )]
    InventoryStock,
    #[sea_orm(
        belongs_to = "super::arsenal_user::Entity",
        from = "Column::UserId",
        to = "super::arsenal_user::Column::Id"
    )]
    ArsenalUser,
    #[sea_orm(
        belongs_to = "super::ammo_type_line::Entity",
        from = "Column::TypeLineId",
        to = "super::ammo_type_line::Column::Id"
    )]
    AmmoTypeLine,
}

impl Related<super::inventory_stock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryStock.def()
    }
}

impl Related<super::arsenal_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArsenalUser.def()
    }
}

impl Related<super::ammo_type_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AmmoTypeLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
