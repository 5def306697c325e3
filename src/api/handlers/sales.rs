//! Sale REST API handlers
//!
//! Create/update enforce the sale input contract before anything reaches
//! the aggregation domain: recognized fuel type, positive litres, positive
//! price with at most 2 decimal places, and an existing pump. Each
//! violation comes back as a 422 naming the offending field. The stored
//! `total_amount` is always derived here, never taken from the client.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::api::dto::{
    ApiResponse, CreateSaleRequest, PaginatedResponse, PaginationParams, SaleDto,
    UpdateSaleRequest,
};
use crate::api::validated_json::ValidatedJson;
use crate::domain::reporting::compute_sale_total;
use crate::domain::sale::{validate_litres, validate_price_per_litre};
use crate::domain::{DomainError, FuelType, Sale};

use super::{error_response, AppState};

async fn ensure_pump_exists(
    state: &AppState,
    pump_id: i32,
) -> Result<(), (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .pumps()
        .find_by_id(pump_id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| {
            error_response(DomainError::validation(
                "pump_id",
                format!("pump {} does not exist", pump_id),
            ))
        })?;
    Ok(())
}

/// List sales, newest first
#[utoipa::path(
    get,
    path = "/api/v1/sales",
    tag = "Sales",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of sales", body = ApiResponse<PaginatedResponse<SaleDto>>)
    )
)]
pub async fn list_sales(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<SaleDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let limit = params.limit.clamp(1, 100);
    let page = params.page.max(1);

    let (sales, total) = state
        .repos
        .sales()
        .find_page(page, limit)
        .await
        .map_err(error_response)?;

    let items: Vec<SaleDto> = sales.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        items, total, page, limit,
    ))))
}

/// Get a sale by ID
#[utoipa::path(
    get,
    path = "/api/v1/sales/{id}",
    tag = "Sales",
    params(
        ("id" = i32, Path, description = "Sale ID")
    ),
    responses(
        (status = 200, description = "Sale details", body = ApiResponse<SaleDto>),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<SaleDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let sale = state
        .repos
        .sales()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Sale", "id", id)))?;
    Ok(Json(ApiResponse::success(sale.into())))
}

/// Record a sale
#[utoipa::path(
    post,
    path = "/api/v1/sales",
    tag = "Sales",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded", body = ApiResponse<SaleDto>),
        (status = 422, description = "Invalid fuel type, litres, price or pump")
    )
)]
pub async fn create_sale(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateSaleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SaleDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let fuel_type = FuelType::parse(&req.fuel_type).map_err(error_response)?;
    validate_litres(req.litres).map_err(error_response)?;
    validate_price_per_litre(req.price_per_litre).map_err(error_response)?;
    ensure_pump_exists(&state, req.pump_id).await?;

    let sale = Sale {
        id: 0, // assigned by the database
        pump_id: req.pump_id,
        fuel_type,
        litres: req.litres,
        price_per_litre: req.price_per_litre,
        total_amount: compute_sale_total(req.litres, req.price_per_litre),
        sale_timestamp: req.sale_timestamp.unwrap_or_else(Utc::now),
        station_name: None, // resolved by the repository on read
    };

    let saved = state.repos.sales().save(sale).await.map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved.into()))))
}

/// Update a sale
///
/// Partial update — send only the fields to change. The total is
/// recomputed from the resulting litres and price.
#[utoipa::path(
    patch,
    path = "/api/v1/sales/{id}",
    tag = "Sales",
    params(
        ("id" = i32, Path, description = "Sale ID")
    ),
    request_body = UpdateSaleRequest,
    responses(
        (status = 200, description = "Sale updated", body = ApiResponse<SaleDto>),
        (status = 404, description = "Sale not found"),
        (status = 422, description = "Invalid fuel type, litres, price or pump")
    )
)]
pub async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateSaleRequest>,
) -> Result<Json<ApiResponse<SaleDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = state
        .repos
        .sales()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Sale", "id", id)))?;

    let fuel_type = match req.fuel_type {
        Some(s) => FuelType::parse(&s).map_err(error_response)?,
        None => existing.fuel_type,
    };

    let litres = req.litres.unwrap_or(existing.litres);
    let price_per_litre = req.price_per_litre.unwrap_or(existing.price_per_litre);
    validate_litres(litres).map_err(error_response)?;
    validate_price_per_litre(price_per_litre).map_err(error_response)?;

    let pump_id = req.pump_id.unwrap_or(existing.pump_id);
    if req.pump_id.is_some() {
        ensure_pump_exists(&state, pump_id).await?;
    }

    let updated = Sale {
        id: existing.id,
        pump_id,
        fuel_type,
        litres,
        price_per_litre,
        total_amount: compute_sale_total(litres, price_per_litre),
        sale_timestamp: req.sale_timestamp.unwrap_or(existing.sale_timestamp),
        station_name: existing.station_name,
    };

    state
        .repos
        .sales()
        .update(updated.clone())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

/// Delete a sale
#[utoipa::path(
    delete,
    path = "/api/v1/sales/{id}",
    tag = "Sales",
    params(
        ("id" = i32, Path, description = "Sale ID")
    ),
    responses(
        (status = 200, description = "Sale deleted"),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.repos.sales().delete(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success("Sale deleted".to_string())))
}
