//! Fuel inventory aggregate

pub mod model;
pub mod repository;

pub use model::FuelInventory;
pub use repository::InventoryRepository;
