//! Domain errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed on {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = DomainError::validation("litres", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Validation failed on litres: must be greater than 0"
        );
    }

    #[test]
    fn not_found_formats_entity_and_key() {
        let err = DomainError::not_found("Pump", "id", 42);
        assert_eq!(err.to_string(), "Not found: Pump with id=42");
    }
}
