pub use sea_orm_migration::prelude::*;

mod m20260110_000001_arsenal_user;
mod m20260110_000002_ammo_type_line;
mod m20260110_000003_inventory_stock;
mod m20260110_000004_issue;
mod m20260110_000005_stock_alert;
mod m20260110_000006_report;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_arsenal_user::Migration),
            Box::new(m20260110_000002_ammo_type_line::Migration),
            Box::new(m20260110_000003_inventory_stock::Migration),
            Box::new(m20260110_000004_issue::Migration),
            Box::new(m20260110_000005_stock_alert::Migration),
            Box::new(m20260110_000006_report::Migration),
        ]
    }
}
