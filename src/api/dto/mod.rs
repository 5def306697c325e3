//! API data transfer objects

pub mod common;
pub mod dashboard;
pub mod inventory;
pub mod pump;
pub mod sale;
pub mod staff;
pub mod station;

pub use common::{ApiResponse, PaginatedResponse, PaginationParams};
pub use dashboard::{
    DashboardDto, FuelBreakdownDto, LowStockAlertDto, TopStationDto, TrendPointDto,
};
pub use inventory::{CreateInventoryRequest, InventoryDto, UpdateInventoryRequest};
pub use pump::{CreatePumpRequest, PumpDto, UpdatePumpRequest};
pub use sale::{CreateSaleRequest, SaleDto, UpdateSaleRequest};
pub use staff::{CreateStaffRequest, StaffDto, UpdateStaffRequest};
pub use station::{CreateStationRequest, StationDto, UpdateStationRequest};
