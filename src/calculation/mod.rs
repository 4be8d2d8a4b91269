//! Calculation logic for the Event Logistics Engine.
//!
//! This module contains the pure rule set: inclusive date spans, vehicle
//! allocation, the crew and labour frame evaluators, event-wide
//! aggregation with date-grouped car sharing, and the orchestrator that
//! runs a whole event plan through them.

mod aggregation;
mod crew_rules;
mod date_span;
mod event;
mod labour_rules;
mod vehicles;

pub use aggregation::{
    TOTALS_RULE_ID, TotalsResult, calculate_total_cars_needed, calculate_totals,
    cars_needed_by_date,
};
pub use crew_rules::{CREW_FRAME_RULE_ID, CrewFrameResult, calculate_crew_frame};
pub use date_span::{FRAME_DATE_FORMAT, days_between, days_between_dates, parse_frame_date};
pub use event::{
    EventEvaluation, WARNING_EXCESS_NAMES, WARNING_INVALID_DATE, WARNING_INVERTED_RANGE,
    WARNING_MISSING_DATE, calculate_event,
};
pub use labour_rules::{LABOUR_FRAME_RULE_ID, LabourFrameResult, calculate_labour_frame};
pub use vehicles::{
    DEFAULT_CREW_CAR_CAPACITY, DEFAULT_LABOUR_VAN_CAPACITY, DEFAULT_OUTSIDE_TRIPS_PER_FRAME,
    vehicles_needed,
};
