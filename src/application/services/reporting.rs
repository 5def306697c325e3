//! Reporting service: assembles the dashboard from repository snapshots
//!
//! Fetches a fully materialized sales snapshot (station names resolved)
//! plus inventory, then applies the pure aggregation functions from
//! `domain::reporting`. All time-window filtering happens here; the
//! aggregation functions never look at the clock.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::domain::reporting::{
    self, DailyTrendPoint, FuelTypeBreakdown, SalesTotals, StationSalesSummary,
};
use crate::domain::sale::Sale;
use crate::domain::{DomainResult, FuelType, RepositoryProvider};

/// Number of entries in the dashboard's recent-sales panel.
const RECENT_SALES_LIMIT: i64 = 10;

/// Number of stations in the dashboard's top-stations panel.
const TOP_STATIONS_LIMIT: usize = 5;

/// Days covered by the dashboard's sales trend.
const TREND_DAYS: u32 = 7;

/// Dashboard time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRange {
    Week,
    Month,
    Quarter,
}

impl ReportRange {
    /// Parse `7d` / `30d` / `90d`; anything else falls back to a week,
    /// matching the behavior the dashboard UI expects.
    pub fn parse(s: &str) -> Self {
        match s {
            "30d" => Self::Month,
            "90d" => Self::Quarter,
            _ => Self::Week,
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }
}

/// A tank running below its minimum threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct LowStockAlert {
    pub station_name: String,
    pub fuel_type: FuelType,
    pub level_percent: rust_decimal::Decimal,
    pub threshold_percent: rust_decimal::Decimal,
}

/// Everything the dashboard view renders, assembled in one pass.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub range: ReportRange,
    pub totals: SalesTotals,
    pub today_sale_count: u64,
    pub recent_sales: Vec<Sale>,
    pub fuel_distribution: Vec<FuelTypeBreakdown>,
    pub sales_trend: Vec<DailyTrendPoint>,
    pub top_stations: Vec<(String, StationSalesSummary)>,
    pub low_stock_alerts: Vec<LowStockAlert>,
    pub total_stations: u64,
    pub total_staff: u64,
}

/// Service for reporting operations
pub struct ReportingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReportingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Build the dashboard for the given window, using `now` as the clock.
    pub async fn dashboard(
        &self,
        range: ReportRange,
        now: DateTime<Utc>,
    ) -> DomainResult<DashboardReport> {
        let all_sales = self.repos.sales().find_all().await?;
        let since = now - Duration::days(range.days());

        // Newest-first ordering from the repository is preserved here, so
        // the recent-sales panel is just a prefix.
        let windowed: Vec<Sale> = all_sales
            .iter()
            .filter(|s| s.sale_timestamp >= since)
            .cloned()
            .collect();

        debug!(
            "Dashboard window {:?}: {} of {} sales",
            range,
            windowed.len(),
            all_sales.len()
        );

        let totals = reporting::overall_totals(&windowed);
        let today = now.date_naive();
        let today_sale_count = all_sales
            .iter()
            .filter(|s| s.sale_timestamp.date_naive() == today)
            .count() as u64;

        let recent_sales = reporting::recent_sales(&all_sales, RECENT_SALES_LIMIT)?;
        let fuel_distribution = reporting::fuel_type_distribution(&windowed);
        let sales_trend = reporting::daily_trend(&all_sales, TREND_DAYS, now);

        let grouped = reporting::group_by_station(&windowed);
        let mut top_stations = reporting::rank_stations_by_revenue(&grouped);
        top_stations.truncate(TOP_STATIONS_LIMIT);

        let low_stock_alerts = self.low_stock_alerts().await?;

        let total_stations = self.repos.stations().find_all_active().await?.len() as u64;
        let total_staff = self
            .repos
            .staff()
            .find_all()
            .await?
            .iter()
            .filter(|s| s.is_active)
            .count() as u64;

        Ok(DashboardReport {
            range,
            totals,
            today_sale_count,
            recent_sales,
            fuel_distribution,
            sales_trend,
            top_stations,
            low_stock_alerts,
            total_stations,
            total_staff,
        })
    }

    /// Tanks currently below threshold, with station names resolved.
    async fn low_stock_alerts(&self) -> DomainResult<Vec<LowStockAlert>> {
        let inventory = self.repos.inventory().find_all().await?;
        let stations = self.repos.stations().find_all_active().await?;

        let names: std::collections::HashMap<i32, String> =
            stations.into_iter().map(|s| (s.id, s.name)).collect();

        Ok(inventory
            .into_iter()
            .filter(|tank| tank.is_low_stock())
            .map(|tank| LowStockAlert {
                station_name: names
                    .get(&tank.station_id)
                    .cloned()
                    .unwrap_or_else(|| reporting::UNKNOWN_STATION.to_string()),
                fuel_type: tank.fuel_type,
                level_percent: tank.stock_percentage(),
                threshold_percent: tank.threshold_percentage(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_parses_known_values() {
        assert_eq!(ReportRange::parse("7d"), ReportRange::Week);
        assert_eq!(ReportRange::parse("30d"), ReportRange::Month);
        assert_eq!(ReportRange::parse("90d"), ReportRange::Quarter);
    }

    #[test]
    fn range_falls_back_to_week() {
        assert_eq!(ReportRange::parse("1y"), ReportRange::Week);
        assert_eq!(ReportRange::parse(""), ReportRange::Week);
    }

    #[test]
    fn range_days() {
        assert_eq!(ReportRange::Week.days(), 7);
        assert_eq!(ReportRange::Month.days(), 30);
        assert_eq!(ReportRange::Quarter.days(), 90);
    }
}
