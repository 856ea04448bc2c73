use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub custodian_id: i32,
    pub quantity: i32,
    pub lot_number: String,
    pub stock_date: Date,
    pub expiry_date: Option<Date>,
    pub min_threshold: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::arsenal_user::Entity",
        from = "Column::CustodianId",
        to = "super::arsenal_user::Column::Id"
    )]
    ArsenalUser,
    #[sea_orm(has_many = "super::issue::Entity")]
    Issue,
    #[sea_orm(has_many = "super::stock_alert::Entity")]
    StockAlert,
}

impl Related<super::arsenal_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArsenalUser.def()
    }
}

impl Related<super::issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Issue.def()
    }
}

impl Related<super::stock_alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockAlert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
