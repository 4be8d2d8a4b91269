//! Core data models for the Event Logistics Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod event_plan;
mod frame;
mod location;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, CrewCalculation, EventCalculation,
    LabourCalculation, TotalCalculation,
};
pub use event_plan::{EventPlan, PlanEdit};
pub use frame::{CrewFrame, FrameKind, LabourFrame, LabourMode};
pub use location::EventLocation;
