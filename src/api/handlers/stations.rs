//! Station REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::api::dto::{
    ApiResponse, CreateStationRequest, InventoryDto, PumpDto, StaffDto, StationDto,
    UpdateStationRequest,
};
use crate::api::validated_json::ValidatedJson;
use crate::domain::{DomainError, Station};

use super::{error_response, AppState};

/// List all active stations
#[utoipa::path(
    get,
    path = "/api/v1/stations",
    tag = "Stations",
    responses(
        (status = 200, description = "Active stations, ordered by name", body = ApiResponse<Vec<StationDto>>)
    )
)]
pub async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StationDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let stations = state
        .repos
        .stations()
        .find_all_active()
        .await
        .map_err(error_response)?;
    let dtos: Vec<StationDto> = stations.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Get a station by ID
#[utoipa::path(
    get,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    params(
        ("id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Station details", body = ApiResponse<StationDto>),
        (status = 404, description = "Station not found")
    )
)]
pub async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<StationDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let station = state
        .repos
        .stations()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Station", "id", id)))?;
    Ok(Json(ApiResponse::success(station.into())))
}

/// Create a station
#[utoipa::path(
    post,
    path = "/api/v1/stations",
    tag = "Stations",
    request_body = CreateStationRequest,
    responses(
        (status = 201, description = "Station created", body = ApiResponse<StationDto>),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_station(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateStationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StationDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let now = Utc::now();
    let station = Station {
        id: 0, // assigned by the database
        name: req.name,
        location: req.location,
        address: req.address,
        phone: req.phone,
        manager_name: req.manager_name,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    let saved = state
        .repos
        .stations()
        .save(station)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into()))))
}

/// Update a station
///
/// Partial update — send only the fields to change.
#[utoipa::path(
    patch,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    params(
        ("id" = i32, Path, description = "Station ID")
    ),
    request_body = UpdateStationRequest,
    responses(
        (status = 200, description = "Station updated", body = ApiResponse<StationDto>),
        (status = 404, description = "Station not found")
    )
)]
pub async fn update_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateStationRequest>,
) -> Result<Json<ApiResponse<StationDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = state
        .repos
        .stations()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Station", "id", id)))?;

    let updated = Station {
        id: existing.id,
        name: req.name.unwrap_or(existing.name),
        location: req.location.unwrap_or(existing.location),
        address: req.address.or(existing.address),
        phone: req.phone.or(existing.phone),
        manager_name: req.manager_name.or(existing.manager_name),
        is_active: existing.is_active,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    state
        .repos
        .stations()
        .update(updated.clone())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

/// Deactivate a station
///
/// Soft delete: the station is marked inactive and disappears from
/// listings, but historical sales keep resolving to its name.
#[utoipa::path(
    delete,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    params(
        ("id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Station deactivated"),
        (status = 404, description = "Station not found")
    )
)]
pub async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .stations()
        .deactivate(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success("Station deactivated".to_string())))
}

/// List a station's pumps
#[utoipa::path(
    get,
    path = "/api/v1/stations/{id}/pumps",
    tag = "Stations",
    params(
        ("id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Pumps at the station", body = ApiResponse<Vec<PumpDto>>),
        (status = 404, description = "Station not found")
    )
)]
pub async fn list_station_pumps(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<PumpDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    ensure_station_exists(&state, id).await?;
    let pumps = state
        .repos
        .pumps()
        .find_by_station(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        pumps.into_iter().map(Into::into).collect(),
    )))
}

/// List a station's staff
#[utoipa::path(
    get,
    path = "/api/v1/stations/{id}/staff",
    tag = "Stations",
    params(
        ("id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Staff at the station", body = ApiResponse<Vec<StaffDto>>),
        (status = 404, description = "Station not found")
    )
)]
pub async fn list_station_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<StaffDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    ensure_station_exists(&state, id).await?;
    let staff = state
        .repos
        .staff()
        .find_by_station(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        staff.into_iter().map(Into::into).collect(),
    )))
}

/// List a station's fuel inventory
#[utoipa::path(
    get,
    path = "/api/v1/stations/{id}/inventory",
    tag = "Stations",
    params(
        ("id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Tanks at the station", body = ApiResponse<Vec<InventoryDto>>),
        (status = 404, description = "Station not found")
    )
)]
pub async fn list_station_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<InventoryDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    ensure_station_exists(&state, id).await?;
    let inventory = state
        .repos
        .inventory()
        .find_by_station(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        inventory.into_iter().map(Into::into).collect(),
    )))
}

async fn ensure_station_exists(
    state: &AppState,
    id: i32,
) -> Result<(), (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .stations()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Station", "id", id)))?;
    Ok(())
}
