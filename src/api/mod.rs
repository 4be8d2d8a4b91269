//! HTTP API module for the Event Logistics Engine.
//!
//! This module provides the REST API endpoints for calculating event
//! logistics, building logistics reports and editing event plans.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CrewFrameRequest, EventRequest, LabourFrameRequest, PlanEditRequest, ReportRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
