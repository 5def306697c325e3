//! Dashboard API handler

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::api::dto::{ApiResponse, DashboardDto};
use crate::application::ReportRange;

use super::{error_response, AppState};

/// Time-window query parameter.
#[derive(Debug, serde::Deserialize)]
pub struct DashboardParams {
    /// Window: "7d", "30d" or "90d". Defaults to "7d".
    pub range: Option<String>,
}

/// Aggregated dashboard
///
/// KPIs, recent sales, fuel-type distribution, the 7-day trend, top
/// stations by revenue and low-stock alerts, all in one payload.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    params(
        ("range" = Option<String>, Query, description = "Window: 7d, 30d, 90d (default: 7d)")
    ),
    responses(
        (status = 200, description = "Dashboard payload", body = ApiResponse<DashboardDto>)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<ApiResponse<DashboardDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let range = ReportRange::parse(params.range.as_deref().unwrap_or("7d"));

    let report = state
        .reporting
        .dashboard(range, Utc::now())
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(report.into())))
}
