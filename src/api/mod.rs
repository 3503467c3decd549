//! HTTP API module for the Override Notification Engine.
//!
//! This module provides the REST API endpoints for rate banding and the
//! WS carrier table pipeline. Dispatch itself is not exposed here: it needs
//! the hosting application's transport and attachment handles and remains a
//! library call.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AggregateRequest, AnnuityRateRequest, ChoiceListRequest, EquityRateRequest,
    MoneyProductRequest, ParseTableRequest,
};
pub use response::ApiError;
pub use state::AppState;
