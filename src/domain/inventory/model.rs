//! Fuel inventory domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::fuel::FuelType;

/// Tank inventory for one fuel grade at one station.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelInventory {
    pub id: i32,
    pub station_id: i32,
    pub fuel_type: FuelType,
    pub capacity_litres: Decimal,
    pub current_level_litres: Decimal,
    pub minimum_threshold_litres: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl FuelInventory {
    /// Fill level as a percentage of capacity. A zero-capacity tank reports 0.
    pub fn stock_percentage(&self) -> Decimal {
        if self.capacity_litres.is_zero() {
            return Decimal::ZERO;
        }
        (self.current_level_litres / self.capacity_litres * Decimal::ONE_HUNDRED).round_dp(1)
    }

    /// Threshold as a percentage of capacity, for display next to the level.
    pub fn threshold_percentage(&self) -> Decimal {
        if self.capacity_litres.is_zero() {
            return Decimal::ZERO;
        }
        (self.minimum_threshold_litres / self.capacity_litres * Decimal::ONE_HUNDRED).round_dp(1)
    }

    /// A tank is low on stock when its level falls below the threshold.
    pub fn is_low_stock(&self) -> bool {
        self.current_level_litres < self.minimum_threshold_litres
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tank(level: Decimal, capacity: Decimal, threshold: Decimal) -> FuelInventory {
        FuelInventory {
            id: 1,
            station_id: 1,
            fuel_type: FuelType::Diesel,
            capacity_litres: capacity,
            current_level_litres: level,
            minimum_threshold_litres: threshold,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn stock_percentage_of_half_full_tank() {
        let t = tank(dec!(5000), dec!(10000), dec!(2000));
        assert_eq!(t.stock_percentage(), dec!(50.0));
    }

    #[test]
    fn stock_percentage_rounds_to_one_decimal() {
        let t = tank(dec!(1), dec!(3), dec!(1));
        assert_eq!(t.stock_percentage(), dec!(33.3));
    }

    #[test]
    fn zero_capacity_reports_zero_percent() {
        let t = tank(dec!(100), Decimal::ZERO, dec!(10));
        assert_eq!(t.stock_percentage(), Decimal::ZERO);
        assert_eq!(t.threshold_percentage(), Decimal::ZERO);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(tank(dec!(1999), dec!(10000), dec!(2000)).is_low_stock());
        assert!(!tank(dec!(2000), dec!(10000), dec!(2000)).is_low_stock());
    }
}
