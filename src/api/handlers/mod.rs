//! API Handlers

pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod pumps;
pub mod sales;
pub mod staff;
pub mod stations;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::application::ReportingService;
use crate::domain::{DomainError, RepositoryProvider};

/// Application state shared by all API handlers
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub reporting: Arc<ReportingService>,
}

/// Map a domain error to its HTTP status and envelope.
pub(crate) fn error_response(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_statuses_follow_error_kind() {
        let (status, _) = error_response(DomainError::not_found("Pump", "id", 9));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(DomainError::validation("litres", "must be positive"));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = error_response(DomainError::InvalidArgument("limit".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(DomainError::Conflict("pump".into()));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = error_response(DomainError::Database("locked".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
