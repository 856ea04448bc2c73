pub use super::ammo_type_line::Entity as AmmoTypeLine;
pub use super::arsenal_user::Entity as ArsenalUser;
pub use super::inventory_stock::Entity as InventoryStock;
pub use super::issue::Entity as Issue;
pub use super::report::Entity as Report;
pub use super::stock_alert::Entity as StockAlert;
