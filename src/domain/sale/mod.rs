//! Sale aggregate

pub mod model;
pub mod repository;

pub use model::{validate_litres, validate_price_per_litre, Sale};
pub use repository::SaleRepository;
