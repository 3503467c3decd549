//! Request types for the Override Notification Engine API.
//!
//! This module defines the JSON request structures for the rate and code
//! endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OverrideChangeFlags;

/// Request body for `POST /rates/annuity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityRateRequest {
    /// The agent's life override rate, in percentage points (0-200).
    pub life_rate: Decimal,
}

/// Request body for `POST /rates/equity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityRateRequest {
    /// The agent's money override rate, in percentage points (0-100).
    pub money_rate: Decimal,
}

/// Request body for `POST /rates/money-products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyProductRequest {
    /// The agent's money override rate, in percentage points (0-100).
    pub money_rate: Decimal,
}

/// Request body for `POST /codes/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseTableRequest {
    /// The WS carrier table as pasted: tab-delimited rows, one per line.
    pub table: String,
}

/// Request body for `POST /codes/choices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceListRequest {
    /// The WS carrier table as pasted.
    pub table: String,
    /// Which compensation categories changed.
    #[serde(default)]
    pub flags: OverrideChangeFlags,
}

/// Request body for `POST /codes/aggregate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// The WS carrier table as pasted.
    pub table: String,
    /// Indices into the parsed record list the user confirmed.
    pub selected: Vec<usize>,
}
