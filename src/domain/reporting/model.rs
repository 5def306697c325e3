//! Sales reporting view models

use rust_decimal::Decimal;

/// Accumulated figures for one station.
///
/// Ephemeral: recomputed on every aggregation call, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationSalesSummary {
    /// Number of sales recorded for the station.
    pub count: u64,
    /// Sum of `total_amount` across those sales.
    pub total: Decimal,
    /// Sum of litres dispensed.
    pub litres: Decimal,
}

/// Per-fuel-type slice of the sales mix.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelTypeBreakdown {
    pub fuel_type: crate::domain::fuel::FuelType,
    pub total_litres: Decimal,
    pub total_revenue: Decimal,
    /// Share of all litres sold, 0–100, one decimal place.
    pub percentage_of_litres: Decimal,
}

/// Overall figures across a sales snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTotals {
    pub count: u64,
    pub total_revenue: Decimal,
    pub total_litres: Decimal,
    /// Mean of `price_per_litre`, 2 decimal places. Zero for an empty snapshot.
    pub avg_price_per_litre: Decimal,
}

/// One calendar day in a sales trend window.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTrendPoint {
    /// ISO date (`YYYY-MM-DD`, UTC).
    pub date: String,
    pub sale_count: u64,
    pub revenue: Decimal,
}
