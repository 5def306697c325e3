//! Dashboard DTOs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{DashboardReport, LowStockAlert, ReportRange};
use crate::domain::reporting::{DailyTrendPoint, FuelTypeBreakdown, StationSalesSummary};
use crate::domain::FuelType;

use super::sale::SaleDto;

/// Aggregated dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardDto {
    /// Window the aggregates cover: "7d", "30d" or "90d"
    pub range: String,
    /// Revenue over the window
    pub total_revenue: Decimal,
    /// Litres dispensed over the window
    pub total_litres: Decimal,
    /// Sales recorded over the window
    pub total_sales: u64,
    /// Mean price per litre over the window (2 decimal places)
    pub avg_price_per_litre: Decimal,
    /// Sales recorded today (UTC)
    pub today_sales: u64,
    /// Active stations
    pub total_stations: u64,
    /// Active staff members
    pub total_staff: u64,
    /// The ten most recent sales
    pub recent_sales: Vec<SaleDto>,
    /// Sales mix per fuel type over the window
    pub fuel_type_distribution: Vec<FuelBreakdownDto>,
    /// Per-day counts and revenue, oldest day first
    pub sales_trend: Vec<TrendPointDto>,
    /// Top stations by revenue over the window
    pub top_stations: Vec<TopStationDto>,
    /// Tanks below their minimum threshold
    pub low_stock_alerts: Vec<LowStockAlertDto>,
}

/// One fuel type's slice of the sales mix.
#[derive(Debug, Serialize, ToSchema)]
pub struct FuelBreakdownDto {
    pub fuel_type: FuelType,
    pub total_litres: Decimal,
    pub total_revenue: Decimal,
    /// Share of all litres sold, 0–100, one decimal place
    pub percentage_of_litres: Decimal,
}

impl From<FuelTypeBreakdown> for FuelBreakdownDto {
    fn from(b: FuelTypeBreakdown) -> Self {
        Self {
            fuel_type: b.fuel_type,
            total_litres: b.total_litres,
            total_revenue: b.total_revenue,
            percentage_of_litres: b.percentage_of_litres,
        }
    }
}

/// One day of the sales trend.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrendPointDto {
    /// ISO date (YYYY-MM-DD, UTC)
    pub date: String,
    pub sale_count: u64,
    pub revenue: Decimal,
}

impl From<DailyTrendPoint> for TrendPointDto {
    fn from(p: DailyTrendPoint) -> Self {
        Self {
            date: p.date,
            sale_count: p.sale_count,
            revenue: p.revenue,
        }
    }
}

/// One ranked station.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopStationDto {
    pub station_name: String,
    pub sale_count: u64,
    pub total_revenue: Decimal,
    pub total_litres: Decimal,
}

impl TopStationDto {
    fn from_ranked(name: String, summary: StationSalesSummary) -> Self {
        Self {
            station_name: name,
            sale_count: summary.count,
            total_revenue: summary.total,
            total_litres: summary.litres,
        }
    }
}

/// A tank running below threshold.
#[derive(Debug, Serialize, ToSchema)]
pub struct LowStockAlertDto {
    pub station_name: String,
    pub fuel_type: FuelType,
    /// Current level as a percentage of capacity
    pub level_percent: Decimal,
    /// Threshold as a percentage of capacity
    pub threshold_percent: Decimal,
}

impl From<LowStockAlert> for LowStockAlertDto {
    fn from(a: LowStockAlert) -> Self {
        Self {
            station_name: a.station_name,
            fuel_type: a.fuel_type,
            level_percent: a.level_percent,
            threshold_percent: a.threshold_percent,
        }
    }
}

fn range_label(range: ReportRange) -> &'static str {
    match range {
        ReportRange::Week => "7d",
        ReportRange::Month => "30d",
        ReportRange::Quarter => "90d",
    }
}

impl From<DashboardReport> for DashboardDto {
    fn from(r: DashboardReport) -> Self {
        Self {
            range: range_label(r.range).to_string(),
            total_revenue: r.totals.total_revenue,
            total_litres: r.totals.total_litres,
            total_sales: r.totals.count,
            avg_price_per_litre: r.totals.avg_price_per_litre,
            today_sales: r.today_sale_count,
            total_stations: r.total_stations,
            total_staff: r.total_staff,
            recent_sales: r.recent_sales.into_iter().map(SaleDto::from).collect(),
            fuel_type_distribution: r
                .fuel_distribution
                .into_iter()
                .map(FuelBreakdownDto::from)
                .collect(),
            sales_trend: r.sales_trend.into_iter().map(TrendPointDto::from).collect(),
            top_stations: r
                .top_stations
                .into_iter()
                .map(|(name, summary)| TopStationDto::from_ranked(name, summary))
                .collect(),
            low_stock_alerts: r
                .low_stock_alerts
                .into_iter()
                .map(LowStockAlertDto::from)
                .collect(),
        }
    }
}
