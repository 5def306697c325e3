//! Pump aggregate

pub mod model;
pub mod repository;

pub use model::Pump;
pub use repository::PumpRepository;
