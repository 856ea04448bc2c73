use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AlertType {
    #[sea_orm(string_value = "low_stock")]
    LowStock,
    #[sea_orm(string_value = "expiry_warning")]
    ExpiryWarning,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AlertStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "acknowledged")]
    Acknowledged,
    #[sea_orm(string_value = "dismissed")]
    Dismissed,
    #[sea_orm(string_value = "resolved")]
    Resolved,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_alert")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inventory_stock_id: i32,
    pub alert_type: AlertType,
    pub status: AlertStatus,
    pub message: String,
    // Set to "<lot id>:<alert type>" while the alert is live, cleared on
    // dismiss/resolve. The unique index on this column is what suppresses
    // duplicate live alerts.
    #[sea_orm(unique)]
    pub dedup_key: Option<String>,
    pub acknowledged_by: Option<i32>,
    pub acknowledged_at: Option<DateTime>,
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
        from = "Column::AcknowledgedBy",
        to = "super::arsenal_user::Column::Id"
    )]
    ArsenalUser,
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

impl ActiveModelBehavior for ActiveModel {}
