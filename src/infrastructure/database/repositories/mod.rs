//! SeaORM repository implementations

pub mod inventory_repository;
pub mod pump_repository;
pub mod repository_provider;
pub mod sale_repository;
pub mod staff_repository;
pub mod station_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

/// Map a SeaORM error into the domain error space.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}
