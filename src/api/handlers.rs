//! HTTP request handlers for the Event Logistics Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_event;
use crate::config::ConfigLoader;
use crate::error::EngineError;
use crate::models::{AuditTrace, CalculationResult, EventPlan};
use crate::report::{ReportOptions, build_report};

use super::request::{EventRequest, PlanEditRequest, ReportRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .route("/plan/edit", post(plan_edit_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts an event description and returns the per-frame calculations,
/// totals and audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let plan: EventPlan = request.into();
    let result = perform_calculation(&plan, state.config());

    for warning in &result.audit_trace.warnings {
        debug!(
            correlation_id = %correlation_id,
            code = %warning.code,
            message = %warning.message,
            "Input warning"
        );
    }

    info!(
        correlation_id = %correlation_id,
        event_name = %plan.event_name,
        location = plan.location.as_str(),
        crew_frames = plan.crew_frames.len(),
        labour_frames = plan.labour_frames.len(),
        total_per_diems = result.calculation.totals.total_per_diems,
        total_cars_needed = result.calculation.totals.total_cars_needed,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /report endpoint.
///
/// Accepts an event description and returns its tabular report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let per_person = request.per_person;
    let plan: EventPlan = request.event.into();

    let evaluation = calculate_event(&plan, config.rules());
    let options = ReportOptions {
        per_person,
        location_label: config.location_label(plan.location).to_string(),
        limits: *config.report_limits(),
    };

    match build_report(&plan, &evaluation.calculation, &options) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                event_name = %plan.event_name,
                per_person,
                rows = report.rows.len(),
                warnings = evaluation.warnings.len(),
                "Report built successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report rejected"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /plan/edit endpoint.
///
/// Applies one edit to the plan in the request and returns the new plan.
/// Frames added by the edit are dated today (UTC).
async fn plan_edit_handler(payload: Result<Json<PlanEditRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing plan edit request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = Utc::now().date_naive();
    match request.plan.apply(request.edit, today) {
        Ok(plan) => {
            info!(
                correlation_id = %correlation_id,
                crew_frames = plan.crew_frames.len(),
                labour_frames = plan.labour_frames.len(),
                "Plan edit applied"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(plan),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Plan edit rejected"
            );
            error_response(err)
        }
    }
}

/// Maps an engine error to its status code and JSON error body.
fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a `400` error body.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
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
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::missing_content_type()
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

/// Evaluates the event and wraps it in the API envelope.
fn perform_calculation(plan: &EventPlan, config: &ConfigLoader) -> CalculationResult {
    let start_time = Instant::now();
    let evaluation = calculate_event(plan, config.rules());
    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);

    CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        event_name: plan.event_name.clone(),
        location: plan.location,
        calculation: evaluation.calculation,
        audit_trace: AuditTrace {
            steps: evaluation.steps,
            warnings: evaluation.warnings,
            duration_us,
        },
    }
}
