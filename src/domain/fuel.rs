//! Fuel type enumeration

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{DomainError, DomainResult};

/// Fuel grades dispensed by pumps.
///
/// Exactly these five values are accepted from the API; anything else is a
/// validation error on the `fuel_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum FuelType {
    Regular,
    Premium,
    Diesel,
    Petrol,
    Kerosene,
}

impl FuelType {
    pub const ALL: [FuelType; 5] = [
        FuelType::Regular,
        FuelType::Premium,
        FuelType::Diesel,
        FuelType::Petrol,
        FuelType::Kerosene,
    ];

    /// Parse one of the five canonical names.
    pub fn parse(s: &str) -> DomainResult<Self> {
        match s {
            "Regular" => Ok(Self::Regular),
            "Premium" => Ok(Self::Premium),
            "Diesel" => Ok(Self::Diesel),
            "Petrol" => Ok(Self::Petrol),
            "Kerosene" => Ok(Self::Kerosene),
            other => Err(DomainError::validation(
                "fuel_type",
                format!("unrecognized fuel type '{}'", other),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Premium => "Premium",
            Self::Diesel => "Diesel",
            Self::Petrol => "Petrol",
            Self::Kerosene => "Kerosene",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FuelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_canonical_names() {
        for ft in FuelType::ALL {
            assert_eq!(FuelType::parse(ft.as_str()).unwrap(), ft);
        }
    }

    #[test]
    fn parse_rejects_unknown_and_names_the_field() {
        let err = FuelType::parse("Electric").unwrap_err();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "fuel_type"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(FuelType::parse("diesel").is_err());
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(FuelType::Kerosene.to_string(), "Kerosene");
    }
}
