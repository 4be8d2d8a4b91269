//! Event-wide totals.
//!
//! Sums the per-frame records and allocates crew cars. Cars are shared
//! between crew frames only when they leave on the same outbound date.

use std::collections::BTreeMap;

use crate::config::TripRules;
use crate::models::{AuditStep, CrewCalculation, CrewFrame, LabourCalculation, TotalCalculation};

use super::vehicles::vehicles_needed;

/// The rule id recorded in the audit trace.
pub const TOTALS_RULE_ID: &str = "event_totals";

/// The event totals with the audit step that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsResult {
    /// The event-wide totals.
    pub totals: TotalCalculation,
    /// The audit step recording the aggregation.
    pub audit_step: AuditStep,
}

/// Groups crew headcount by outbound date and returns the cars per date.
///
/// Frames with no crew are skipped. Dates are compared as the exact strings
/// the frames carry and come back in ascending string order.
///
/// # Example
///
/// ```
/// use logistics_engine::calculation::cars_needed_by_date;
/// use logistics_engine::models::CrewFrame;
///
/// let frame = |outbound: &str, count: i64| CrewFrame {
///     id: outbound.to_string(),
///     name: String::new(),
///     outbound: outbound.to_string(),
///     inbound: outbound.to_string(),
///     count,
///     crew_names: vec![],
///     outbound_travel_day: false,
///     inbound_travel_day: false,
/// };
///
/// let frames = vec![frame("2026-03-02", 3), frame("2026-03-02", 4), frame("2026-03-05", 1)];
/// let by_date = cars_needed_by_date(&frames, 2);
///
/// assert_eq!(by_date["2026-03-02"], 4);
/// assert_eq!(by_date["2026-03-05"], 1);
/// ```
pub fn cars_needed_by_date(crew_frames: &[CrewFrame], car_capacity: u64) -> BTreeMap<String, u64> {
    let mut headcount_by_date: BTreeMap<String, u64> = BTreeMap::new();

    for frame in crew_frames.iter().filter(|f| f.headcount() > 0) {
        let entry = headcount_by_date.entry(frame.outbound.clone()).or_insert(0);
        *entry = entry.saturating_add(frame.headcount());
    }

    headcount_by_date
        .into_iter()
        .map(|(date, headcount)| (date, vehicles_needed(headcount, car_capacity)))
        .collect()
}

/// Total crew cars across all outbound dates.
pub fn calculate_total_cars_needed(crew_frames: &[CrewFrame], car_capacity: u64) -> u64 {
    sum_cars(&cars_needed_by_date(crew_frames, car_capacity))
}

fn sum_cars(cars_by_date: &BTreeMap<String, u64>) -> u64 {
    cars_by_date
        .values()
        .fold(0u64, |total, cars| total.saturating_add(*cars))
}

/// Reduces the per-frame records into event totals.
///
/// `crew_calculations` must be index-aligned with `crew_frames`; the frames
/// themselves are only read for date-grouped car sharing.
pub fn calculate_totals(
    crew_frames: &[CrewFrame],
    crew_calculations: &[CrewCalculation],
    labour_calculations: &[LabourCalculation],
    rules: &TripRules,
    step_number: u32,
) -> TotalsResult {
    let mut totals = TotalCalculation::default();

    for calc in crew_calculations {
        totals.total_crew_count = totals.total_crew_count.saturating_add(calc.crew_count);
        totals.total_per_diems = totals.total_per_diems.saturating_add(calc.per_diems);
        totals.total_hotel_nights = totals.total_hotel_nights.saturating_add(calc.hotel_nights);
        totals.total_inner_trips = totals.total_inner_trips.saturating_add(calc.inner_trips);
        totals.total_outside_trips = totals.total_outside_trips.saturating_add(calc.outside_trips);
    }

    for calc in labour_calculations {
        totals.total_labour_count = totals.total_labour_count.saturating_add(calc.labour_count);
        totals.total_per_diems = totals.total_per_diems.saturating_add(calc.per_diems);
        totals.total_hotel_nights = totals.total_hotel_nights.saturating_add(calc.hotel_nights);
        totals.total_labour_trips = totals.total_labour_trips.saturating_add(calc.transport_trips);
    }

    let car_capacity = rules.vehicles.crew_car_capacity;
    let cars_by_date = cars_needed_by_date(crew_frames, car_capacity);
    totals.total_cars_needed = sum_cars(&cars_by_date);

    let audit_step = AuditStep {
        step_number,
        rule_id: TOTALS_RULE_ID.to_string(),
        rule_name: "Event Totals".to_string(),
        input: serde_json::json!({
            "crew_frames": crew_calculations.len(),
            "labour_frames": labour_calculations.len(),
            "crew_car_capacity": car_capacity
        }),
        output: serde_json::json!({
            "totals": totals,
            "cars_by_date": cars_by_date
        }),
        reasoning: format!(
            "Summed {} crew and {} labour frames; {} car(s) across {} outbound date(s)",
            crew_calculations.len(),
            labour_calculations.len(),
            totals.total_cars_needed,
            cars_by_date.len()
        ),
    };

    TotalsResult { totals, audit_step }
}
