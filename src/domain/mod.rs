//! Core business entities, types and traits

pub mod error;
pub mod fuel;
pub mod inventory;
pub mod pump;
pub mod reporting;
pub mod repositories;
pub mod sale;
pub mod staff;
pub mod station;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use fuel::FuelType;
pub use inventory::{FuelInventory, InventoryRepository};
pub use pump::{Pump, PumpRepository};
pub use repositories::RepositoryProvider;
pub use sale::{Sale, SaleRepository};
pub use staff::{StaffMember, StaffRepository};
pub use station::{Station, StationRepository};
