//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so server code does not
//! import from the generated `entity` crate directly.

/// A tracked quantity of ammunition under one lot number and custodian.
///
/// `quantity` is the authoritative on-hand count and is never negative; it is
/// only mutated by the issue-creation transaction or by direct correction
/// edits through the inventory endpoints.
pub type StockLotModel = entity::inventory_stock::Model;

/// A record of ammunition disbursed from a stock lot to a requester.
pub type IssueModel = entity::issue::Model;

/// A low-stock or expiry notification derived from stock lot state.
pub type AlertModel = entity::stock_alert::Model;

/// An armoury user: custodian of stock lots and requester on issue records.
pub type UserModel = entity::arsenal_user::Model;

/// Metadata row for an uploaded report PDF.
pub type ReportModel = entity::report::Model;

/// Reference row describing one ammunition type line (caliber/category/nature).
pub type AmmoTypeLineModel = entity::ammo_type_line::Model;
