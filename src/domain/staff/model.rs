//! Staff domain entity

use chrono::{DateTime, Utc};

use crate::domain::error::{DomainError, DomainResult};

/// A staff member assigned to one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub station_id: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Staff name policy: at least two words.
pub fn validate_staff_name(name: &str) -> DomainResult<()> {
    if name.split_whitespace().count() < 2 {
        return Err(DomainError::validation(
            "name",
            "must contain at least two words",
        ));
    }
    Ok(())
}

/// Staff role policy: letters and spaces only, non-empty.
pub fn validate_staff_role(role: &str) -> DomainResult<()> {
    let trimmed = role.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(DomainError::validation(
            "role",
            "must contain letters and spaces only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_two_words() {
        assert!(validate_staff_name("Amina Yusuf").is_ok());
        assert!(validate_staff_name("Amina").is_err());
        assert!(validate_staff_name("  ").is_err());
    }

    #[test]
    fn name_accepts_more_than_two_words() {
        assert!(validate_staff_name("Jean Claude van Damme").is_ok());
    }

    #[test]
    fn role_rejects_digits_and_punctuation() {
        assert!(validate_staff_role("attendant").is_ok());
        assert!(validate_staff_role("shift manager").is_ok());
        assert!(validate_staff_role("cashier2").is_err());
        assert!(validate_staff_role("night-shift").is_err());
        assert!(validate_staff_role("").is_err());
    }

    #[test]
    fn policy_errors_name_their_fields() {
        match validate_staff_name("solo").unwrap_err() {
            DomainError::Validation { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error: {:?}", other),
        }
        match validate_staff_role("r0le").unwrap_err() {
            DomainError::Validation { field, .. } => assert_eq!(field, "role"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
