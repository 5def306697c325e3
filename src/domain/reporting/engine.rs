//! Sales aggregation engine
//!
//! Pure, synchronous transformations from a fully materialized sales
//! snapshot to view-ready reporting structures. No I/O, inputs are never
//! mutated; each call is independent and idempotent for identical input.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use super::model::{DailyTrendPoint, FuelTypeBreakdown, SalesTotals, StationSalesSummary};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::sale::Sale;

/// Bucket for sales whose pump → station reference no longer resolves.
pub const UNKNOWN_STATION: &str = "Unknown Station";

/// `litres × price_per_litre`, rounded to 2 decimal places half-up.
///
/// The product is rounded; the inputs are not re-rounded. E.g.
/// 45.5 L × 1.45 = 65.975 → 65.98.
pub fn compute_sale_total(litres: Decimal, price_per_litre: Decimal) -> Decimal {
    (litres * price_per_litre).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Group a sales snapshot by resolved station name.
///
/// Sales without a resolvable station accumulate under [`UNKNOWN_STATION`]
/// rather than being dropped, so every sale is counted exactly once.
/// The returned map iterates in station-name order.
pub fn group_by_station(sales: &[Sale]) -> BTreeMap<String, StationSalesSummary> {
    let mut summaries: BTreeMap<String, StationSalesSummary> = BTreeMap::new();

    for sale in sales {
        let name = sale
            .station_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_STATION.to_string());
        let entry = summaries.entry(name).or_default();
        entry.count += 1;
        entry.total += sale.total_amount;
        entry.litres += sale.litres;
    }

    summaries
}

/// Order station summaries by revenue, highest first.
///
/// Ties are broken by station name ascending: the input map iterates in
/// name order and the sort is stable, so equal totals keep that order.
pub fn rank_stations_by_revenue(
    summaries: &BTreeMap<String, StationSalesSummary>,
) -> Vec<(String, StationSalesSummary)> {
    let mut ranked: Vec<(String, StationSalesSummary)> = summaries
        .iter()
        .map(|(name, summary)| (name.clone(), summary.clone()))
        .collect();
    ranked.sort_by(|a, b| b.1.total.cmp(&a.1.total));
    ranked
}

/// The first `limit` sales in the order given.
///
/// The caller is responsible for having sorted by recency; a `limit` past
/// the end returns everything. Negative limits are rejected.
pub fn recent_sales(sales: &[Sale], limit: i64) -> DomainResult<Vec<Sale>> {
    if limit < 0 {
        return Err(DomainError::InvalidArgument(format!(
            "limit must be non-negative, got {}",
            limit
        )));
    }
    Ok(sales.iter().take(limit as usize).cloned().collect())
}

/// Litres and revenue per fuel type, with each type's share of all litres.
///
/// Only fuel types present in the snapshot appear, ordered by fuel type;
/// an empty snapshot yields an empty vec. When total litres is zero every
/// percentage is 0 rather than dividing by zero.
pub fn fuel_type_distribution(sales: &[Sale]) -> Vec<FuelTypeBreakdown> {
    let mut per_fuel: BTreeMap<crate::domain::fuel::FuelType, (Decimal, Decimal)> =
        BTreeMap::new();

    for sale in sales {
        let entry = per_fuel.entry(sale.fuel_type).or_default();
        entry.0 += sale.litres;
        entry.1 += sale.total_amount;
    }

    let total_litres: Decimal = per_fuel.values().map(|(litres, _)| *litres).sum();

    per_fuel
        .into_iter()
        .map(|(fuel_type, (litres, revenue))| {
            let percentage = if total_litres.is_zero() {
                Decimal::ZERO
            } else {
                (litres / total_litres * Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            };
            FuelTypeBreakdown {
                fuel_type,
                total_litres: litres,
                total_revenue: revenue,
                percentage_of_litres: percentage,
            }
        })
        .collect()
}

/// Snapshot-wide totals: count, revenue, litres and mean price per litre.
pub fn overall_totals(sales: &[Sale]) -> SalesTotals {
    if sales.is_empty() {
        return SalesTotals::default();
    }

    let count = sales.len() as u64;
    let total_revenue: Decimal = sales.iter().map(|s| s.total_amount).sum();
    let total_litres: Decimal = sales.iter().map(|s| s.litres).sum();
    let price_sum: Decimal = sales.iter().map(|s| s.price_per_litre).sum();
    let avg_price_per_litre = (price_sum / Decimal::from(count))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    SalesTotals {
        count,
        total_revenue,
        total_litres,
        avg_price_per_litre,
    }
}

/// Per-day sale counts and revenue for the trailing `days` calendar days
/// (UTC) ending at `now`'s date, oldest day first. Days without sales are
/// zero-filled. `now` is a parameter so callers control the clock.
pub fn daily_trend(sales: &[Sale], days: u32, now: DateTime<Utc>) -> Vec<DailyTrendPoint> {
    let today = now.date_naive();

    (0..days)
        .map(|i| {
            let date = today - Duration::days((days - 1 - i) as i64);
            let mut sale_count = 0u64;
            let mut revenue = Decimal::ZERO;
            for sale in sales {
                if sale.sale_timestamp.date_naive() == date {
                    sale_count += 1;
                    revenue += sale.total_amount;
                }
            }
            DailyTrendPoint {
                date: date.format("%Y-%m-%d").to_string(),
                sale_count,
                revenue,
            }
        })
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fuel::FuelType;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sale(station: Option<&str>, fuel: FuelType, litres: Decimal, price: Decimal) -> Sale {
        Sale {
            id: 0,
            pump_id: 1,
            fuel_type: fuel,
            litres,
            price_per_litre: price,
            total_amount: compute_sale_total(litres, price),
            sale_timestamp: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
            station_name: station.map(String::from),
        }
    }

    fn sample_sales() -> Vec<Sale> {
        vec![
            sale(Some("Alpha"), FuelType::Petrol, dec!(40), dec!(2.50)),   // 100.00
            sale(Some("Bravo"), FuelType::Diesel, dec!(100), dec!(2.50)),  // 250.00
            sale(Some("Alpha"), FuelType::Diesel, dec!(20), dec!(2.50)),   // 50.00
        ]
    }

    // ── compute_sale_total ─────────────────────────────────────

    #[test]
    fn total_rounds_product_half_up() {
        // 45.5 * 1.45 = 65.975 → 65.98
        assert_eq!(compute_sale_total(dec!(45.5), dec!(1.45)), dec!(65.98));
    }

    #[test]
    fn total_of_exact_product_is_unchanged() {
        assert_eq!(compute_sale_total(dec!(10), dec!(1.455)), dec!(14.55));
        assert_eq!(compute_sale_total(dec!(40), dec!(2.50)), dec!(100.00));
    }

    #[test]
    fn total_midpoint_rounds_away_from_zero() {
        // 2.5 * 0.01 = 0.025 → 0.03, not banker's 0.02
        assert_eq!(compute_sale_total(dec!(2.5), dec!(0.01)), dec!(0.03));
    }

    // ── group_by_station ───────────────────────────────────────

    #[test]
    fn grouping_counts_every_sale_exactly_once() {
        let sales = sample_sales();
        let grouped = group_by_station(&sales);
        let counted: u64 = grouped.values().map(|s| s.count).sum();
        assert_eq!(counted, sales.len() as u64);
    }

    #[test]
    fn grouping_preserves_total_revenue() {
        let sales = sample_sales();
        let grouped = group_by_station(&sales);
        let input_total: Decimal = sales.iter().map(|s| s.total_amount).sum();
        let grouped_total: Decimal = grouped.values().map(|s| s.total).sum();
        assert_eq!(input_total, grouped_total);
    }

    #[test]
    fn grouping_accumulates_per_station() {
        let grouped = group_by_station(&sample_sales());
        let alpha = &grouped["Alpha"];
        assert_eq!(alpha.count, 2);
        assert_eq!(alpha.total, dec!(150.00));
        assert_eq!(alpha.litres, dec!(60));
        let bravo = &grouped["Bravo"];
        assert_eq!(bravo.count, 1);
        assert_eq!(bravo.total, dec!(250.00));
    }

    #[test]
    fn missing_station_goes_to_sentinel_not_dropped() {
        let sales = vec![
            sale(None, FuelType::Petrol, dec!(10), dec!(2)),
            sale(None, FuelType::Diesel, dec!(5), dec!(2)),
            sale(Some("Alpha"), FuelType::Petrol, dec!(1), dec!(2)),
        ];
        let grouped = group_by_station(&sales);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[UNKNOWN_STATION].count, 2);
        assert_eq!(grouped[UNKNOWN_STATION].total, dec!(30.00));
    }

    #[test]
    fn grouping_empty_input_is_empty() {
        assert!(group_by_station(&[]).is_empty());
    }

    #[test]
    fn grouping_is_order_independent() {
        let mut sales = sample_sales();
        let forward = group_by_station(&sales);
        sales.reverse();
        assert_eq!(group_by_station(&sales), forward);
    }

    // ── rank_stations_by_revenue ───────────────────────────────

    #[test]
    fn ranking_is_descending_by_total() {
        let grouped = group_by_station(&sample_sales());
        let ranked = rank_stations_by_revenue(&grouped);
        assert_eq!(ranked.len(), grouped.len());
        assert_eq!(ranked[0].0, "Bravo");
        assert_eq!(ranked[0].1.total, dec!(250.00));
        assert_eq!(ranked[1].0, "Alpha");
        assert_eq!(ranked[1].1.total, dec!(150.00));
    }

    #[test]
    fn ranking_breaks_ties_by_name_ascending() {
        let sales = vec![
            sale(Some("Zulu"), FuelType::Petrol, dec!(10), dec!(2)),
            sale(Some("Alpha"), FuelType::Petrol, dec!(10), dec!(2)),
            sale(Some("Mike"), FuelType::Petrol, dec!(10), dec!(2)),
        ];
        let ranked = rank_stations_by_revenue(&group_by_station(&sales));
        let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Alpha", "Mike", "Zulu"]);
    }

    #[test]
    fn ranking_omits_and_duplicates_nothing() {
        let sales = vec![
            sale(Some("A"), FuelType::Petrol, dec!(1), dec!(1)),
            sale(Some("B"), FuelType::Petrol, dec!(2), dec!(1)),
            sale(None, FuelType::Petrol, dec!(3), dec!(1)),
        ];
        let grouped = group_by_station(&sales);
        let ranked = rank_stations_by_revenue(&grouped);
        assert_eq!(ranked.len(), 3);
        let mut names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 3);
    }

    // ── recent_sales ───────────────────────────────────────────

    #[test]
    fn recent_sales_takes_prefix_in_given_order() {
        let sales = sample_sales();
        let recent = recent_sales(&sales, 2).unwrap();
        assert_eq!(recent, sales[..2].to_vec());
    }

    #[test]
    fn recent_sales_zero_limit_is_empty() {
        assert!(recent_sales(&sample_sales(), 0).unwrap().is_empty());
    }

    #[test]
    fn recent_sales_limit_past_end_returns_all_unmodified() {
        let sales = sample_sales();
        let recent = recent_sales(&sales, sales.len() as i64 + 5).unwrap();
        assert_eq!(recent, sales);
    }

    #[test]
    fn recent_sales_negative_limit_is_invalid_argument() {
        match recent_sales(&sample_sales(), -1).unwrap_err() {
            DomainError::InvalidArgument(_) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    // ── fuel_type_distribution ─────────────────────────────────

    #[test]
    fn distribution_of_empty_input_is_empty() {
        assert!(fuel_type_distribution(&[]).is_empty());
    }

    #[test]
    fn distribution_percentages_sum_to_one_hundred() {
        let dist = fuel_type_distribution(&sample_sales());
        let sum: Decimal = dist.iter().map(|d| d.percentage_of_litres).sum();
        assert!((sum - Decimal::ONE_HUNDRED).abs() <= dec!(0.1), "sum={}", sum);
    }

    #[test]
    fn distribution_aggregates_per_fuel_type() {
        let dist = fuel_type_distribution(&sample_sales());
        assert_eq!(dist.len(), 2);
        // BTreeMap order: Diesel before Petrol (enum order)
        assert_eq!(dist[0].fuel_type, FuelType::Diesel);
        assert_eq!(dist[0].total_litres, dec!(120));
        assert_eq!(dist[0].total_revenue, dec!(300.00));
        assert_eq!(dist[0].percentage_of_litres, dec!(75.0));
        assert_eq!(dist[1].fuel_type, FuelType::Petrol);
        assert_eq!(dist[1].percentage_of_litres, dec!(25.0));
    }

    #[test]
    fn distribution_with_zero_litres_avoids_division() {
        // degenerate snapshot: zero-litre records only
        let mut s = sale(Some("A"), FuelType::Petrol, dec!(1), dec!(1));
        s.litres = Decimal::ZERO;
        let dist = fuel_type_distribution(&[s]);
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].percentage_of_litres, Decimal::ZERO);
    }

    // ── overall_totals ─────────────────────────────────────────

    #[test]
    fn totals_for_empty_snapshot_are_zero() {
        assert_eq!(overall_totals(&[]), SalesTotals::default());
    }

    #[test]
    fn totals_sum_revenue_litres_and_average_price() {
        let totals = overall_totals(&sample_sales());
        assert_eq!(totals.count, 3);
        assert_eq!(totals.total_revenue, dec!(400.00));
        assert_eq!(totals.total_litres, dec!(160));
        assert_eq!(totals.avg_price_per_litre, dec!(2.50));
    }

    // ── daily_trend ────────────────────────────────────────────

    #[test]
    fn trend_returns_one_point_per_day_oldest_first() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
        let trend = daily_trend(&sample_sales(), 7, now);
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, "2024-03-04");
        assert_eq!(trend[6].date, "2024-03-10");
        // all sample sales fall on the final day
        assert_eq!(trend[6].sale_count, 3);
        assert_eq!(trend[6].revenue, dec!(400.00));
    }

    #[test]
    fn trend_zero_fills_empty_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
        let trend = daily_trend(&sample_sales(), 3, now);
        assert_eq!(trend[0].sale_count, 0);
        assert_eq!(trend[0].revenue, Decimal::ZERO);
        assert_eq!(trend[1].sale_count, 0);
    }

    // ── end to end ─────────────────────────────────────────────

    #[test]
    fn grouping_then_ranking_end_to_end() {
        // A: 100 + 50, B: 250 → grouped A{2,150}, B{1,250} → ranked [B, A]
        let sales = vec![
            sale(Some("A"), FuelType::Petrol, dec!(50), dec!(2)),
            sale(Some("B"), FuelType::Diesel, dec!(125), dec!(2)),
            sale(Some("A"), FuelType::Petrol, dec!(25), dec!(2)),
        ];
        let grouped = group_by_station(&sales);
        assert_eq!(grouped["A"].count, 2);
        assert_eq!(grouped["A"].total, dec!(150.00));
        assert_eq!(grouped["B"].count, 1);
        assert_eq!(grouped["B"].total, dec!(250.00));

        let ranked = rank_stations_by_revenue(&grouped);
        assert_eq!(ranked[0].0, "B");
        assert_eq!(ranked[1].0, "A");
    }
}
