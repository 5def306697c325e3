//! Staff aggregate

pub mod model;
pub mod repository;

pub use model::{validate_staff_name, validate_staff_role, StaffMember};
pub use repository::StaffRepository;
