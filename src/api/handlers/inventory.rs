//! Fuel inventory REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;

use crate::api::dto::{
    ApiResponse, CreateInventoryRequest, InventoryDto, UpdateInventoryRequest,
};
use crate::api::validated_json::ValidatedJson;
use crate::domain::{DomainError, FuelInventory, FuelType};

use super::{error_response, AppState};

fn validate_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), (StatusCode, Json<ApiResponse<()>>)> {
    if value < Decimal::ZERO {
        return Err(error_response(DomainError::validation(
            field,
            "must not be negative",
        )));
    }
    Ok(())
}

/// List all fuel inventory
#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    tag = "Inventory",
    responses(
        (status = 200, description = "All tanks", body = ApiResponse<Vec<InventoryDto>>)
    )
)]
pub async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<InventoryDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let inventory = state
        .repos
        .inventory()
        .find_all()
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        inventory.into_iter().map(Into::into).collect(),
    )))
}

/// Create a tank record
#[utoipa::path(
    post,
    path = "/api/v1/inventory",
    tag = "Inventory",
    request_body = CreateInventoryRequest,
    responses(
        (status = 201, description = "Tank created", body = ApiResponse<InventoryDto>),
        (status = 409, description = "Tank for this fuel grade already exists at the station"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateInventoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<InventoryDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let fuel_type = FuelType::parse(&req.fuel_type).map_err(error_response)?;
    validate_non_negative("capacity_litres", req.capacity_litres)?;
    validate_non_negative("current_level_litres", req.current_level_litres)?;
    validate_non_negative("minimum_threshold_litres", req.minimum_threshold_litres)?;

    state
        .repos
        .stations()
        .find_by_id(req.station_id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| {
            error_response(DomainError::validation(
                "station_id",
                format!("station {} does not exist", req.station_id),
            ))
        })?;

    let tank = FuelInventory {
        id: 0, // assigned by the database
        station_id: req.station_id,
        fuel_type,
        capacity_litres: req.capacity_litres,
        current_level_litres: req.current_level_litres,
        minimum_threshold_litres: req.minimum_threshold_litres,
        updated_at: chrono::Utc::now(),
    };

    let saved = state
        .repos
        .inventory()
        .save(tank)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into()))))
}

/// Update a tank record
///
/// Partial update — send only the fields to change.
#[utoipa::path(
    patch,
    path = "/api/v1/inventory/{id}",
    tag = "Inventory",
    params(
        ("id" = i32, Path, description = "Tank ID")
    ),
    request_body = UpdateInventoryRequest,
    responses(
        (status = 200, description = "Tank updated", body = ApiResponse<InventoryDto>),
        (status = 404, description = "Tank not found")
    )
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateInventoryRequest>,
) -> Result<Json<ApiResponse<InventoryDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = state
        .repos
        .inventory()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("FuelInventory", "id", id)))?;

    let capacity = req.capacity_litres.unwrap_or(existing.capacity_litres);
    let level = req
        .current_level_litres
        .unwrap_or(existing.current_level_litres);
    let threshold = req
        .minimum_threshold_litres
        .unwrap_or(existing.minimum_threshold_litres);
    validate_non_negative("capacity_litres", capacity)?;
    validate_non_negative("current_level_litres", level)?;
    validate_non_negative("minimum_threshold_litres", threshold)?;

    let updated = FuelInventory {
        id: existing.id,
        station_id: existing.station_id,
        fuel_type: existing.fuel_type,
        capacity_litres: capacity,
        current_level_litres: level,
        minimum_threshold_litres: threshold,
        updated_at: chrono::Utc::now(),
    };

    state
        .repos
        .inventory()
        .update(updated.clone())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

/// Delete a tank record
#[utoipa::path(
    delete,
    path = "/api/v1/inventory/{id}",
    tag = "Inventory",
    params(
        ("id" = i32, Path, description = "Tank ID")
    ),
    responses(
        (status = 200, description = "Tank deleted"),
        (status = 404, description = "Tank not found")
    )
)]
pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .inventory()
        .delete(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success("Tank deleted".to_string())))
}
