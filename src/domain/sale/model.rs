//! Sale domain entity and the input validation contract

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::fuel::FuelType;

/// A single fuel-dispensing transaction.
///
/// `total_amount` is always derived server-side as
/// `litres × price_per_litre` rounded to 2 decimal places; totals supplied
/// by clients are ignored. `station_name` is resolved through the
/// pump → station join when the sale is loaded; `None` means the pump or its
/// station no longer resolves and the sale aggregates under the
/// "Unknown Station" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: i32,
    pub pump_id: i32,
    pub fuel_type: FuelType,
    pub litres: Decimal,
    pub price_per_litre: Decimal,
    pub total_amount: Decimal,
    pub sale_timestamp: DateTime<Utc>,
    pub station_name: Option<String>,
}

/// Litres policy: strictly positive.
pub fn validate_litres(litres: Decimal) -> DomainResult<()> {
    if litres <= Decimal::ZERO {
        return Err(DomainError::validation(
            "litres",
            "must be greater than 0",
        ));
    }
    Ok(())
}

/// Price policy: strictly positive, at most 2 decimal places.
pub fn validate_price_per_litre(price: Decimal) -> DomainResult<()> {
    if price <= Decimal::ZERO {
        return Err(DomainError::validation(
            "price_per_litre",
            "must be greater than 0",
        ));
    }
    if price.normalize().scale() > 2 {
        return Err(DomainError::validation(
            "price_per_litre",
            "at most 2 decimal places allowed",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn litres_must_be_positive() {
        assert!(validate_litres(dec!(0.01)).is_ok());
        assert!(validate_litres(Decimal::ZERO).is_err());
        assert!(validate_litres(dec!(-5)).is_err());
    }

    #[test]
    fn price_must_be_positive() {
        assert!(validate_price_per_litre(dec!(1.45)).is_ok());
        assert!(validate_price_per_litre(Decimal::ZERO).is_err());
        assert!(validate_price_per_litre(dec!(-1.45)).is_err());
    }

    #[test]
    fn price_allows_at_most_two_decimals() {
        assert!(validate_price_per_litre(dec!(180)).is_ok());
        assert!(validate_price_per_litre(dec!(1.4)).is_ok());
        assert!(validate_price_per_litre(dec!(1.45)).is_ok());
        // trailing zeros do not count as extra precision
        assert!(validate_price_per_litre(dec!(1.450)).is_ok());
        assert!(validate_price_per_litre(dec!(1.455)).is_err());
    }

    #[test]
    fn price_errors_name_the_field() {
        match validate_price_per_litre(dec!(1.999)).unwrap_err() {
            DomainError::Validation { field, .. } => assert_eq!(field, "price_per_litre"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
