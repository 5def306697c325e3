//! Sales aggregation and reporting

pub mod engine;
pub mod model;

pub use engine::{
    compute_sale_total, daily_trend, fuel_type_distribution, group_by_station, overall_totals,
    rank_stations_by_revenue, recent_sales, UNKNOWN_STATION,
};
pub use model::{DailyTrendPoint, FuelTypeBreakdown, SalesTotals, StationSalesSummary};
