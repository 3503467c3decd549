//! HTTP request handlers for the Override Notification Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::banding::{annuity_rate, equity_rate, money_product_rates};
use crate::error::EngineError;
use crate::locale::Passthrough;
use crate::parser::parse_carrier_table;
use crate::selection::{aggregate_selection, build_choice_list, resolve_handled_carriers};

use super::request::{
    AggregateRequest, AnnuityRateRequest, ChoiceListRequest, EquityRateRequest,
    MoneyProductRequest, ParseTableRequest,
};
use super::response::{
    AggregateResponse, AnnuityRateResponse, ApiError, ApiErrorResponse, ChoiceListResponse,
    EquityRateResponse, MoneyProductResponse, ParseTableResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates/annuity", post(annuity_handler))
        .route("/rates/equity", post(equity_handler))
        .route("/rates/money-products", post(money_products_handler))
        .route("/codes/parse", post(parse_handler))
        .route("/codes/choices", post(choices_handler))
        .route("/codes/aggregate", post(aggregate_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, turning axum rejections into the API error
/// envelope.
fn unwrap_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /rates/annuity.
async fn annuity_handler(
    payload: Result<Json<AnnuityRateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match annuity_rate(request.life_rate) {
        Ok(rate) => {
            info!(
                correlation_id = %correlation_id,
                life_rate = %request.life_rate,
                annuity_rate = %rate,
                "Annuity rate banded"
            );
            json_ok(AnnuityRateResponse { annuity_rate: rate })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for POST /rates/equity.
async fn equity_handler(
    payload: Result<Json<EquityRateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match equity_rate(request.money_rate) {
        Ok(rate) => json_ok(EquityRateResponse { equity_rate: rate }),
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for POST /rates/money-products.
async fn money_products_handler(
    payload: Result<Json<MoneyProductRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match money_product_rates(request.money_rate) {
        Ok((personal, corporate)) => json_ok(MoneyProductResponse {
            personal: personal.to_string(),
            corporate: corporate.to_string(),
        }),
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for POST /codes/parse.
async fn parse_handler(
    payload: Result<Json<ParseTableRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match parse_carrier_table(&request.table) {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                "WS carrier table parsed"
            );
            json_ok(ParseTableResponse { records })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for POST /codes/choices.
async fn choices_handler(
    payload: Result<Json<ChoiceListRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match parse_carrier_table(&request.table) {
        Ok(records) => {
            // The translation host isn't reachable over this surface, so
            // labels carry the untranslated source strings.
            let choices = build_choice_list(&records, &request.flags, &Passthrough);
            json_ok(ChoiceListResponse { choices })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for POST /codes/aggregate.
async fn aggregate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AggregateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let records = match parse_carrier_table(&request.table) {
        Ok(records) => records,
        Err(error) => return engine_error_response(correlation_id, error),
    };

    match aggregate_selection(&request.selected, &records) {
        Ok(codes) => {
            let language = state.language();
            let handled_carriers = resolve_handled_carriers(&codes);
            let attachment_variables = handled_carriers
                .iter()
                .map(|carrier| carrier.attachment_variable(language))
                .collect();
            info!(
                correlation_id = %correlation_id,
                selected = request.selected.len(),
                carriers = handled_carriers.len(),
                "Code selection aggregated"
            );
            json_ok(AggregateResponse {
                codes,
                handled_carriers,
                attachment_variables,
            })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}
