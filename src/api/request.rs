//! Request types for the Event Logistics Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`,
//! `/report` and `/plan/edit` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{CrewFrame, EventLocation, EventPlan, LabourFrame, LabourMode, PlanEdit};

/// Request body for the `/calculate` endpoint.
///
/// Describes one event: its location class and every crew and labour frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// Display name of the event.
    #[serde(default)]
    pub event_name: Option<String>,
    /// The location class of the event.
    pub location: EventLocation,
    /// Crew attendance windows.
    #[serde(default)]
    pub crew_frames: Vec<CrewFrameRequest>,
    /// Labour attendance windows.
    #[serde(default)]
    pub labour_frames: Vec<LabourFrameRequest>,
}

/// A crew frame in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewFrameRequest {
    /// Frame identifier. Optional; used only to label audit steps.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Outbound date, `YYYY-MM-DD`. Missing dates evaluate to zero days.
    #[serde(default)]
    pub outbound: String,
    /// Inbound date, `YYYY-MM-DD`.
    #[serde(default)]
    pub inbound: String,
    /// Headcount.
    pub count: i64,
    /// Names of the crew.
    #[serde(default)]
    pub crew_names: Vec<String>,
    /// The outbound date is spent travelling.
    #[serde(default)]
    pub outbound_travel_day: bool,
    /// The inbound date is spent travelling.
    #[serde(default)]
    pub inbound_travel_day: bool,
}

/// A labour frame in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabourFrameRequest {
    /// Frame identifier. Optional; used only to label audit steps.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Outbound date, `YYYY-MM-DD`. Missing dates evaluate to zero days.
    #[serde(default)]
    pub outbound: String,
    /// Inbound date, `YYYY-MM-DD`.
    #[serde(default)]
    pub inbound: String,
    /// Headcount.
    pub count: i64,
    /// Names of the labourers.
    #[serde(default)]
    pub labour_names: Vec<String>,
    /// How the labour travels. Defaults to a daily round trip.
    #[serde(default)]
    pub mode: LabourMode,
    /// Whether the labour stays in a hotel at a remote event.
    #[serde(default)]
    pub hotel_required: bool,
}

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The event to report on.
    pub event: EventRequest,
    /// One row per person instead of one row per frame.
    #[serde(default)]
    pub per_person: bool,
}

/// Request body for the `/plan/edit` endpoint.
///
/// The server keeps no plans; the caller sends the current plan with each
/// edit and receives the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEditRequest {
    /// The plan to edit.
    pub plan: EventPlan,
    /// The edit to apply.
    pub edit: PlanEdit,
}

impl From<EventRequest> for EventPlan {
    fn from(req: EventRequest) -> Self {
        EventPlan {
            event_name: req.event_name.unwrap_or_default(),
            location: req.location,
            crew_frames: req.crew_frames.into_iter().map(Into::into).collect(),
            labour_frames: req.labour_frames.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CrewFrameRequest> for CrewFrame {
    fn from(req: CrewFrameRequest) -> Self {
        CrewFrame {
            id: req.id,
            name: req.name,
            outbound: req.outbound,
            inbound: req.inbound,
            count: req.count,
            crew_names: req.crew_names,
            outbound_travel_day: req.outbound_travel_day,
            inbound_travel_day: req.inbound_travel_day,
        }
    }
}

impl From<LabourFrameRequest> for LabourFrame {
    fn from(req: LabourFrameRequest) -> Self {
        LabourFrame {
            id: req.id,
            name: req.name,
            outbound: req.outbound,
            inbound: req.inbound,
            count: req.count,
            labour_names: req.labour_names,
            mode: req.mode,
            hotel_required: req.hotel_required,
        }
    }
}
