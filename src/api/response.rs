//! Response types for the PPh21 Withholding Engine API.
//!
//! This module defines the response envelope around calculation results,
//! the batch response shapes, and the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::CalculationResult;

/// A calculation result wrapped with API-level metadata.
///
/// The engine result itself is pure and deterministic; the id and
/// timestamp exist only at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationEnvelope {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employment this calculation is for, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_id: Option<String>,
    /// The tax year, when the calculation had period context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The calculation result.
    #[serde(flatten)]
    pub result: CalculationResult,
}

impl CalculationEnvelope {
    /// Wraps a result with fresh metadata.
    pub fn new(result: CalculationResult, employment_id: Option<String>, year: Option<i32>) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employment_id,
            year,
            result,
        }
    }
}

/// One employment's outcome within a batch response.
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItemResponse {
    /// The employment this entry is for.
    pub employment_id: String,
    /// Display name echoed from the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    /// The calculation result, when the item succeeded.
    #[serde(flatten)]
    pub result: Option<CalculationResult>,
    /// The failure, when the item did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Response body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    /// Tax year of the batch.
    pub year: i32,
    /// Month of the batch.
    pub month: u8,
    /// Number of items submitted.
    pub total: usize,
    /// Number of items that calculated successfully.
    pub success: usize,
    /// Number of items that failed.
    pub failed: usize,
    /// Per-item outcomes in request order.
    pub results: Vec<BatchItemResponse>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        match &error {
            EngineError::InvalidInput { .. } => {
                ApiError::new("INVALID_INPUT", error.to_string())
            }
            EngineError::InvalidMonth { .. } => {
                ApiError::new("INVALID_MONTH", error.to_string())
            }
            EngineError::MissingTaxProfile { .. } => {
                ApiError::new("MISSING_TAX_PROFILE", error.to_string())
            }
            EngineError::ComponentNotFound { code } => ApiError::with_details(
                "COMPONENT_NOT_FOUND",
                error.to_string(),
                format!("The earning component '{}' is not in the catalog", code),
            ),
            EngineError::DeductionComponentNotFound { code } => ApiError::with_details(
                "DEDUCTION_COMPONENT_NOT_FOUND",
                error.to_string(),
                format!("The deduction component '{}' is not in the catalog", code),
            ),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string())
            }
        }
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match &error {
            EngineError::InvalidInput { .. }
            | EngineError::InvalidMonth { .. }
            | EngineError::ComponentNotFound { .. }
            | EngineError::DeductionComponentNotFound { .. } => StatusCode::BAD_REQUEST,
            EngineError::MissingTaxProfile { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ApiErrorResponse {
            status,
            error: error.into(),
        }
    }
}
