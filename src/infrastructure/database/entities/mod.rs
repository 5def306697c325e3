//! SeaORM entities

pub mod fuel_inventory;
pub mod pump;
pub mod sale;
pub mod staff;
pub mod station;
