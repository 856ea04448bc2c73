//! Type aliases for entity models used by fixtures.

pub type UserModel = entity::arsenal_user::Model;
pub type StockLotModel = entity::inventory_stock::Model;
pub type AmmoTypeLineModel = entity::ammo_type_line::Model;
