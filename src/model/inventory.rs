use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StockLotDto {
    pub id: i32,
    pub custodian_id: i32,
    pub quantity: i32,
    pub lot_number: String,
    pub stock_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub min_threshold: Option<i32>,
    pub updated_at: NaiveDateTime,
}

/// Request body for adding a stock lot; also the body for full updates
/// (`PUT /api/inventory/{id}` replaces every editable field).
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateStockLotDto {
    pub custodian_id: i32,
    pub quantity: i32,
    pub lot_number: String,
    pub stock_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub min_threshold: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AmmoTypeLineDto {
    pub id: i32,
    pub caliber: String,
    pub category: String,
    pub nature: String,
}
