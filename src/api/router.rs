//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{
    dashboard, health, inventory, pumps, sales, staff, stations, AppState,
};
use crate::api::metrics::{http_metrics_middleware, metrics_handler};
use crate::api::request_id::request_id_middleware;
use crate::application::ReportingService;
use crate::domain::{FuelType, RepositoryProvider};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Dashboard
        dashboard::get_dashboard,
        // Stations
        stations::list_stations,
        stations::get_station,
        stations::create_station,
        stations::update_station,
        stations::delete_station,
        stations::list_station_pumps,
        stations::list_station_staff,
        stations::list_station_inventory,
        // Pumps
        pumps::list_pumps,
        pumps::get_pump,
        pumps::create_pump,
        pumps::update_pump,
        pumps::delete_pump,
        // Staff
        staff::list_staff,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        // Sales
        sales::list_sales,
        sales::get_sale,
        sales::create_sale,
        sales::update_sale,
        sales::delete_sale,
        // Inventory
        inventory::list_inventory,
        inventory::create_inventory,
        inventory::update_inventory,
        inventory::delete_inventory,
    ),
    components(schemas(
        FuelType,
        StationDto,
        CreateStationRequest,
        UpdateStationRequest,
        PumpDto,
        CreatePumpRequest,
        UpdatePumpRequest,
        StaffDto,
        CreateStaffRequest,
        UpdateStaffRequest,
        SaleDto,
        CreateSaleRequest,
        UpdateSaleRequest,
        InventoryDto,
        CreateInventoryRequest,
        UpdateInventoryRequest,
        DashboardDto,
        FuelBreakdownDto,
        TrendPointDto,
        TopStationDto,
        LowStockAlertDto,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Dashboard", description = "Aggregated reporting"),
        (name = "Stations", description = "Station management"),
        (name = "Pumps", description = "Pump management"),
        (name = "Staff", description = "Staff management"),
        (name = "Sales", description = "Fuel sales"),
        (name = "Inventory", description = "Fuel inventory"),
    ),
    info(
        title = "Forecourt Management API",
        description = "REST API for managing petrol stations, pumps, staff, fuel sales and inventory"
    )
)]
pub struct ApiDoc;

/// Build the REST API router.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    reporting: Arc<ReportingService>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let state = AppState { repos, reporting };

    let api_routes = Router::new()
        .route("/api/v1/health", get(health::health_check))
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        // Stations
        .route(
            "/api/v1/stations",
            get(stations::list_stations).post(stations::create_station),
        )
        .route(
            "/api/v1/stations/{id}",
            get(stations::get_station)
                .patch(stations::update_station)
                .delete(stations::delete_station),
        )
        .route("/api/v1/stations/{id}/pumps", get(stations::list_station_pumps))
        .route("/api/v1/stations/{id}/staff", get(stations::list_station_staff))
        .route(
            "/api/v1/stations/{id}/inventory",
            get(stations::list_station_inventory),
        )
        // Pumps
        .route("/api/v1/pumps", get(pumps::list_pumps).post(pumps::create_pump))
        .route(
            "/api/v1/pumps/{id}",
            get(pumps::get_pump)
                .patch(pumps::update_pump)
                .delete(pumps::delete_pump),
        )
        // Staff
        .route("/api/v1/staff", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/api/v1/staff/{id}",
            get(staff::get_staff)
                .patch(staff::update_staff)
                .delete(staff::delete_staff),
        )
        // Sales
        .route("/api/v1/sales", get(sales::list_sales).post(sales::create_sale))
        .route(
            "/api/v1/sales/{id}",
            get(sales::get_sale)
                .patch(sales::update_sale)
                .delete(sales::delete_sale),
        )
        // Inventory
        .route(
            "/api/v1/inventory",
            get(inventory::list_inventory).post(inventory::create_inventory),
        )
        .route(
            "/api/v1/inventory/{id}",
            patch(inventory::update_inventory).delete(inventory::delete_inventory),
        )
        .with_state(state);

    let metrics_route = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    Router::new()
        .merge(api_routes)
        .merge(metrics_route)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
