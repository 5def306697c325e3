//! Staff REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::api::dto::{ApiResponse, CreateStaffRequest, StaffDto, UpdateStaffRequest};
use crate::api::validated_json::ValidatedJson;
use crate::domain::{DomainError, StaffMember};

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

/// List all staff
#[utoipa::path(
    get,
    path = "/api/v1/staff",
    tag = "Staff",
    responses(
        (status = 200, description = "All staff members", body = ApiResponse<Vec<StaffDto>>)
    )
)]
pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StaffDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let staff = state.repos.staff().find_all().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        staff.into_iter().map(Into::into).collect(),
    )))
}

/// Get a staff member by ID
#[utoipa::path(
    get,
    path = "/api/v1/staff/{id}",
    tag = "Staff",
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member details", body = ApiResponse<StaffDto>),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<StaffDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let member = state
        .repos
        .staff()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Staff", "id", id)))?;
    Ok(Json(ApiResponse::success(member.into())))
}

/// Create a staff member
#[utoipa::path(
    post,
    path = "/api/v1/staff",
    tag = "Staff",
    request_body = CreateStaffRequest,
    responses(
        (status = 201, description = "Staff member created", body = ApiResponse<StaffDto>),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_staff(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateStaffRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StaffDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    ensure_station_exists(&state, req.station_id).await?;

    let now = Utc::now();
    let member = StaffMember {
        id: 0, // assigned by the database
        name: req.name,
        role: req.role,
        station_id: req.station_id,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    let saved = state.repos.staff().save(member).await.map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into()))))
}

/// Update a staff member
///
/// Partial update — send only the fields to change.
#[utoipa::path(
    patch,
    path = "/api/v1/staff/{id}",
    tag = "Staff",
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    request_body = UpdateStaffRequest,
    responses(
        (status = 200, description = "Staff member updated", body = ApiResponse<StaffDto>),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateStaffRequest>,
) -> Result<Json<ApiResponse<StaffDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = state
        .repos
        .staff()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Staff", "id", id)))?;

    if let Some(station_id) = req.station_id {
        ensure_station_exists(&state, station_id).await?;
    }

    let updated = StaffMember {
        id: existing.id,
        name: req.name.unwrap_or(existing.name),
        role: req.role.unwrap_or(existing.role),
        station_id: req.station_id.unwrap_or(existing.station_id),
        is_active: req.is_active.unwrap_or(existing.is_active),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    state
        .repos
        .staff()
        .update(updated.clone())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

/// Delete a staff member
#[utoipa::path(
    delete,
    path = "/api/v1/staff/{id}",
    tag = "Staff",
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member deleted"),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.repos.staff().delete(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success("Staff member deleted".to_string())))
}
