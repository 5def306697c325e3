//! Pump REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::api::dto::{ApiResponse, CreatePumpRequest, PumpDto, UpdatePumpRequest};
use crate::api::validated_json::ValidatedJson;
use crate::domain::{DomainError, FuelType, Pump};

use super::{error_response, AppState};

async fn ensure_station_exists(
    state: &AppState,
    station_id: i32,
) -> Result<(), (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .stations()
        .find_by_id(station_id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| {
            error_response(DomainError::validation(
                "station_id",
                format!("station {} does not exist", station_id),
            ))
        })?;
    Ok(())
}

/// List all pumps
#[utoipa::path(
    get,
    path = "/api/v1/pumps",
    tag = "Pumps",
    responses(
        (status = 200, description = "All pumps", body = ApiResponse<Vec<PumpDto>>)
    )
)]
pub async fn list_pumps(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PumpDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let pumps = state.repos.pumps().find_all().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        pumps.into_iter().map(Into::into).collect(),
    )))
}

/// Get a pump by ID
#[utoipa::path(
    get,
    path = "/api/v1/pumps/{id}",
    tag = "Pumps",
    params(
        ("id" = i32, Path, description = "Pump ID")
    ),
    responses(
        (status = 200, description = "Pump details", body = ApiResponse<PumpDto>),
        (status = 404, description = "Pump not found")
    )
)]
pub async fn get_pump(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PumpDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let pump = state
        .repos
        .pumps()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Pump", "id", id)))?;
    Ok(Json(ApiResponse::success(pump.into())))
}

/// Create a pump
#[utoipa::path(
    post,
    path = "/api/v1/pumps",
    tag = "Pumps",
    request_body = CreatePumpRequest,
    responses(
        (status = 201, description = "Pump created", body = ApiResponse<PumpDto>),
        (status = 409, description = "Pump number already taken at the station"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_pump(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreatePumpRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PumpDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let fuel_type = FuelType::parse(&req.fuel_type).map_err(error_response)?;
    ensure_station_exists(&state, req.station_id).await?;

    let now = Utc::now();
    let pump = Pump {
        id: 0, // assigned by the database
        pump_number: req.pump_number,
        fuel_type,
        station_id: req.station_id,
        created_at: now,
        updated_at: now,
    };

    let saved = state.repos.pumps().save(pump).await.map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into()))))
}

/// Update a pump
///
/// Partial update — send only the fields to change.
#[utoipa::path(
    patch,
    path = "/api/v1/pumps/{id}",
    tag = "Pumps",
    params(
        ("id" = i32, Path, description = "Pump ID")
    ),
    request_body = UpdatePumpRequest,
    responses(
        (status = 200, description = "Pump updated", body = ApiResponse<PumpDto>),
        (status = 404, description = "Pump not found")
    )
)]
pub async fn update_pump(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdatePumpRequest>,
) -> Result<Json<ApiResponse<PumpDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = state
        .repos
        .pumps()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Pump", "id", id)))?;

    let fuel_type = match req.fuel_type {
        Some(s) => FuelType::parse(&s).map_err(error_response)?,
        None => existing.fuel_type,
    };

    if let Some(station_id) = req.station_id {
        ensure_station_exists(&state, station_id).await?;
    }

    let updated = Pump {
        id: existing.id,
        pump_number: req.pump_number.unwrap_or(existing.pump_number),
        fuel_type,
        station_id: req.station_id.unwrap_or(existing.station_id),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    state
        .repos
        .pumps()
        .update(updated.clone())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

/// Delete a pump
#[utoipa::path(
    delete,
    path = "/api/v1/pumps/{id}",
    tag = "Pumps",
    params(
        ("id" = i32, Path, description = "Pump ID")
    ),
    responses(
        (status = 200, description = "Pump deleted"),
        (status = 404, description = "Pump not found")
    )
)]
pub async fn delete_pump(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.repos.pumps().delete(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success("Pump deleted".to_string())))
}
