//! Common API DTOs and error mapping

pub mod validated_json;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use validated_json::ValidatedJson;

use crate::domain::DomainError;

/// Standard API response envelope.
///
/// Every REST endpoint returns its payload in this wrapper.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload, `null` on error
    pub data: Option<T>,
    /// Error description, `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Map a domain error onto its HTTP status and response envelope.
pub fn domain_error(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) | DomainError::Computation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComputationError;

    #[test]
    fn not_found_maps_to_404() {
        let (status, _) = domain_error(DomainError::NotFound {
            entity: "Building",
            field: "id",
            value: "7".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn computation_errors_map_to_422() {
        let (status, body) = domain_error(
            ComputationError::NonPositiveUsage {
                unit: 3,
                liters: -40,
            }
            .into(),
        );
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!body.success);
    }

    #[test]
    fn storage_errors_map_to_500() {
        let (status, _) = domain_error(DomainError::Storage("Database error: gone".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
