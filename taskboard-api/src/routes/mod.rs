/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User CRUD endpoints
/// - `tasks`: Task CRUD endpoints with ownership checks
/// - `links`: Task-to-user link endpoints

pub mod health;
pub mod links;
pub mod tasks;
pub mod users;

use crate::error::ApiError;
use validator::Validate;

/// Runs validator checks on a request body, flattening field errors into a
/// single `400 Bad Request` detail message.
pub(crate) fn validate_request<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate().map_err(|e| {
        let detail = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "validation failed".to_string())
                    )
                })
            })
            .collect::<Vec<_>>()
            .join("; ");
        ApiError::BadRequest(detail)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn test_validate_request_flattens_field_errors() {
        let ok = Sample {
            name: "x".to_string(),
        };
        assert!(validate_request(&ok).is_ok());

        let bad = Sample {
            name: String::new(),
        };
        let err = validate_request(&bad).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
