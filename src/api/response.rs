//! Response types for the Override Notification Engine API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Carrier, CarrierCodeRecord, CodeMap};
use crate::parser::INVALID_TABLE_MESSAGE;
use crate::selection::CodeChoice;

/// Response body for `POST /rates/annuity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityRateResponse {
    /// The banded annuity rate.
    pub annuity_rate: Decimal,
}

/// Response body for `POST /rates/equity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityRateResponse {
    /// The equity rate from the dense sheet.
    pub equity_rate: Decimal,
}

/// Response body for `POST /rates/money-products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyProductResponse {
    /// Two-digit personal money-product code.
    pub personal: String,
    /// Two-digit corporate money-product code.
    pub corporate: String,
}

/// Response body for `POST /codes/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseTableResponse {
    /// The records that survived parsing, in input order.
    pub records: Vec<CarrierCodeRecord>,
}

/// Response body for `POST /codes/choices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceListResponse {
    /// The confirmation choice list, in record order.
    pub choices: Vec<CodeChoice>,
}

/// Response body for `POST /codes/aggregate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResponse {
    /// The per-carrier code map built from the selection.
    pub codes: CodeMap,
    /// The carriers whose document sets are needed, aliases resolved.
    pub handled_carriers: Vec<Carrier>,
    /// The attachment variables to resolve for those carriers.
    pub attachment_variables: Vec<String>,
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::RateOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("RATE_OUT_OF_RANGE", error.to_string()),
            },
            EngineError::RateTableGap { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RATE_TABLE_GAP",
                    "Rate table lookup failed",
                    error.to_string(),
                ),
            },
            EngineError::BranchNotFound { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("BRANCH_NOT_FOUND", error.to_string()),
            },
            EngineError::MalformedTable { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    INVALID_TABLE_MESSAGE,
                    error.to_string(),
                ),
            },
            EngineError::SelectionIndexOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("SELECTION_OUT_OF_RANGE", error.to_string()),
            },
            EngineError::AttachmentNotFound { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("ATTACHMENT_NOT_FOUND", error.to_string()),
            },
            EngineError::ConfigNotFound { ref path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { ref path, ref message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
