use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        inventory::{AmmoTypeLineDto, CreateStockLotDto, StockLotDto},
    },
    server::{
        data::type_line::TypeLineRepository,
        error::Error,
        model::{
            app::AppState,
            db::{AmmoTypeLineModel, StockLotModel},
        },
        service::inventory::InventoryService,
    },
};

pub static INVENTORY_TAG: &str = "inventory";

fn to_dto(lot: StockLotModel) -> StockLotDto {
    StockLotDto {
        id: lot.id,
        custodian_id: lot.custodian_id,
        quantity: lot.quantity,
        lot_number: lot.lot_number,
        stock_date: lot.stock_date,
        expiry_date: lot.expiry_date,
        min_threshold: lot.min_threshold,
        updated_at: lot.updated_at,
    }
}

/// Get all stock lots
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All stock lots", body = Vec<StockLotDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let lots = InventoryService::new(&state.db).list_lots().await?;

    let dtos: Vec<StockLotDto> = lots.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single stock lot by ID
#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Stock lot ID")),
    responses(
        (status = 200, description = "The stock lot", body = StockLotDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let lot = InventoryService::new(&state.db).get_lot(id).await?;

    Ok((StatusCode::OK, Json(to_dto(lot))))
}

/// Add a new stock lot
#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    request_body = CreateStockLotDto,
    responses(
        (status = 201, description = "Lot created", body = CreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inventory_item(
    State(state): State<AppState>,
    Json(lot): Json<CreateStockLotDto>,
) -> Result<impl IntoResponse, Error> {
    let lot = InventoryService::new(&state.db).add_lot(&lot).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            id: lot.id,
            message: "Item added successfully".to_string(),
        }),
    ))
}

/// Update a stock lot, including direct quantity corrections
#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Stock lot ID")),
    request_body = CreateStockLotDto,
    responses(
        (status = 200, description = "Lot updated", body = MessageDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inventory_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(lot): Json<CreateStockLotDto>,
) -> Result<impl IntoResponse, Error> {
    InventoryService::new(&state.db).update_lot(id, &lot).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Item updated successfully".to_string(),
        }),
    ))
}

/// Delete a stock lot
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(("id" = i32, Path, description = "Stock lot ID")),
    responses(
        (status = 200, description = "Lot deleted", body = MessageDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    InventoryService::new(&state.db).delete_lot(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Item deleted successfully".to_string(),
        }),
    ))
}

/// List ammunition type lines for the issue form dropdown
#[utoipa::path(
    get,
    path = "/api/ammo-type-lines",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All type lines", body = Vec<AmmoTypeLineDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ammo_type_lines(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let lines = TypeLineRepository::new(&state.db).get_all().await?;

    let dtos: Vec<AmmoTypeLineDto> = lines
        .into_iter()
        .map(|line: AmmoTypeLineModel| AmmoTypeLineDto {
            id: line.id,
            caliber: line.caliber,
            category: line.category,
            nature: line.nature,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
