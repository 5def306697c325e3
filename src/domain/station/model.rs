//! Station domain entity

use chrono::{DateTime, Utc};

/// A petrol station. Owns pumps, staff and fuel inventory.
///
/// Stations are soft-deleted: `DELETE` flips `is_active` instead of removing
/// the row, so historical sales keep resolving to a station name.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
