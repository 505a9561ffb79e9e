// src/application/error_handling.rs
//
// Error Handling for the UI boundary
//
// ARCHITECTURE:
// - Maps internal errors -> user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::domain::form::ValidationError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found
    NotFound,

    /// Form input rejected; details lists every message
    Validation,

    /// Record invariant violation
    DomainError,

    /// Persistence failure
    Storage,

    /// Storage is full
    QuotaExceeded,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound(what) => Self {
                success: false,
                error_type: ErrorType::NotFound,
                message: format!("{} not found", what),
                details: None,
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Record validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::QuotaExceeded { needed, quota } => {
                log::error!("Storage quota exceeded: {} > {}", needed, quota);

                Self {
                    success: false,
                    error_type: ErrorType::QuotaExceeded,
                    message: "Storage is full; remove some entries and try again".to_string(),
                    details: None,
                }
            }

            AppError::Database(_) | AppError::Pool(_) | AppError::Io(_) => {
                log::error!("Storage error: {}", error);

                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Saving the collection failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// One response carrying every validation message, one per line
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message: "Please correct the highlighted fields".to_string(),
            details: Some(
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        }
    }
}

/// Helper trait to convert Results into a JSON error string for the UI
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound("Manga 7".to_string()));
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Manga 7 not found");
    }

    #[test]
    fn test_quota_error() {
        let error = ErrorResponse::from_app_error(AppError::QuotaExceeded {
            needed: 10,
            quota: 5,
        });
        assert_eq!(error.error_type, ErrorType::QuotaExceeded);
    }

    #[test]
    fn test_validation_lists_every_message() {
        let error = ErrorResponse::from_validation(&[
            ValidationError::TitleRequired,
            ValidationError::YearOutOfRange,
        ]);
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(
            error.details.as_deref(),
            Some("Title is required.\nYear must be a whole number between 1900 and 2030.")
        );
    }

    #[test]
    fn test_to_error_response_serializes() {
        let result: Result<(), AppError> = Err(AppError::Pool("gone".to_string()));
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("\"error_type\":\"storage\""));

        let ok: Result<u8, AppError> = Ok(1);
        assert_eq!(ok.to_error_response(), Ok(1));
    }
}
