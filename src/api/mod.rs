//! REST API module
//!
//! HTTP endpoints for managing stations, pumps, staff, sales and fuel
//! inventory, plus the aggregated dashboard, with Swagger documentation.

pub mod dto;
pub mod handlers;
pub mod metrics;
pub mod request_id;
pub mod router;
pub mod validated_json;

pub use router::{create_api_router, ApiDoc};
pub use validated_json::ValidatedJson;
