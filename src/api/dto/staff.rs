//! Staff DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::staff::{validate_staff_name, validate_staff_role};
use crate::domain::StaffMember;

/// A staff member.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 7,
    "name": "Grace Wanjiru",
    "role": "attendant",
    "station_id": 1,
    "is_active": true,
    "created_at": "2025-06-01T08:00:00Z",
    "updated_at": "2025-06-01T08:00:00Z"
}))]
pub struct StaffDto {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub station_id: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StaffMember> for StaffDto {
    fn from(s: StaffMember) -> Self {
        Self {
            id: s.id,
            name: s.name,
            role: s.role,
            station_id: s.station_id,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Name policy: at least two words.
fn two_word_name(name: &str) -> Result<(), ValidationError> {
    validate_staff_name(name).map_err(|_| {
        let mut err = ValidationError::new("two_word_name");
        err.message = Some("must contain at least two words".into());
        err
    })
}

/// Role policy: letters and spaces only.
fn letters_only_role(role: &str) -> Result<(), ValidationError> {
    validate_staff_role(role).map_err(|_| {
        let mut err = ValidationError::new("letters_only_role");
        err.message = Some("must contain letters and spaces only".into());
        err
    })
}

/// Create-staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStaffRequest {
    #[validate(custom(function = "two_word_name"))]
    pub name: String,
    #[validate(custom(function = "letters_only_role"))]
    pub role: String,
    pub station_id: i32,
}

/// Update-staff request (partial update — send only changed fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStaffRequest {
    #[validate(custom(function = "two_word_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "letters_only_role"))]
    pub role: Option<String>,
    pub station_id: Option<i32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_enforces_name_and_role_policy() {
        let ok = CreateStaffRequest {
            name: "Amina Yusuf".into(),
            role: "attendant".into(),
            station_id: 1,
        };
        assert!(ok.validate().is_ok());

        let one_word = CreateStaffRequest {
            name: "Amina".into(),
            role: "attendant".into(),
            station_id: 1,
        };
        assert!(one_word.validate().is_err());

        let digit_role = CreateStaffRequest {
            name: "Amina Yusuf".into(),
            role: "cashier2".into(),
            station_id: 1,
        };
        assert!(digit_role.validate().is_err());
    }

    #[test]
    fn update_request_skips_absent_fields() {
        let req = UpdateStaffRequest {
            name: None,
            role: None,
            station_id: Some(2),
            is_active: None,
        };
        assert!(req.validate().is_ok());
    }
}
