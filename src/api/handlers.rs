//! HTTP request handlers for the Leave Entitlement Engine API.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_reports, evaluation_years};
use crate::models::Employee;

use super::request::EntitlementRequest;
use super::response::{ApiError, ApiErrorResponse, EntitlementResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlements", post(entitlements_handler))
        .with_state(state)
}

/// Handler for POST /entitlements.
///
/// Accepts a batch of employees and returns one entitlement series per employee.
async fn entitlements_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let (as_of, employees) = match request.into_parts() {
        Ok(parts) => parts,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected employee batch"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    // Captured once so every employee shares the same cutoff.
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let start_time = Instant::now();
    let response = compute_entitlements(&employees, as_of, &state);
    let warnings: usize = response
        .reports
        .iter()
        .map(|r| r.audit_trace.warnings.len())
        .sum();

    info!(
        correlation_id = %correlation_id,
        employees = employees.len(),
        as_of = %as_of,
        warnings,
        duration_us = start_time.elapsed().as_micros(),
        "Entitlement calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Computes the batch and wraps it with calculation metadata.
fn compute_entitlements(
    employees: &[Employee],
    as_of: NaiveDate,
    state: &AppState,
) -> EntitlementResponse {
    let policy = state.policy();

    EntitlementResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        policy: state.config().metadata().clone(),
        as_of,
        years: evaluation_years(policy, as_of).collect(),
        reports: build_reports(employees, as_of, policy),
    }
}
