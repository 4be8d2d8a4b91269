//! Crew frame rules.
//!
//! Derives per-diems, hotel nights, and inner/outside trip counts for one
//! crew frame. Local events are modelled as a daily commute between home
//! and the venue. Remote events are modelled as venue-hotel legs plus a
//! fixed pair of long-haul legs in and out of the remote location.

use crate::config::TripRules;
use crate::models::{AuditStep, CrewCalculation, CrewFrame, EventLocation};

use super::date_span::days_between;

/// The rule id recorded in the audit trace.
pub const CREW_FRAME_RULE_ID: &str = "crew_frame_rules";

/// The result of evaluating one crew frame, with its audit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewFrameResult {
    /// The derived counts.
    pub calculation: CrewCalculation,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Evaluates the crew rules for one frame.
///
/// # Rules
///
/// - A frame with no crew, or spanning no valid days, yields all zeros.
/// - Per-diems: one per person per day in range.
/// - Hotel nights: none locally; otherwise `(days - 1)` per person.
/// - Local trips: a round trip per person per day, minus the round trip of
///   each travel day. No outside trips.
/// - Remote trips: one arrival leg and one departure leg per person unless
///   the matching travel-day flag is set, plus a round trip per person for
///   every day strictly between. A one-day frame with either flag set has
///   no legs at all. Outside trips are the configured fixed count.
///
/// # Example
///
/// ```
/// use logistics_engine::calculation::calculate_crew_frame;
/// use logistics_engine::config::TripRules;
/// use logistics_engine::models::{CrewFrame, EventLocation};
///
/// let frame = CrewFrame {
///     id: "c1".to_string(),
///     name: "Camera".to_string(),
///     outbound: "2026-03-02".to_string(),
///     inbound: "2026-03-04".to_string(),
///     count: 4,
///     crew_names: vec![],
///     outbound_travel_day: false,
///     inbound_travel_day: false,
/// };
///
/// let result = calculate_crew_frame(&frame, EventLocation::Local, &TripRules::default(), 1);
/// assert_eq!(result.calculation.per_diems, 12);
/// assert_eq!(result.calculation.inner_trips, 24);
/// assert_eq!(result.calculation.outside_trips, 0);
/// ```
pub fn calculate_crew_frame(
    frame: &CrewFrame,
    location: EventLocation,
    rules: &TripRules,
    step_number: u32,
) -> CrewFrameResult {
    let count = frame.headcount();
    let total_days = days_between(&frame.outbound, &frame.inbound);

    let (calculation, reasoning) = if count == 0 {
        (
            CrewCalculation::default(),
            format!("Frame '{}' has no crew - all counts are zero", frame.name),
        )
    } else if total_days == 0 {
        (
            CrewCalculation::default(),
            format!(
                "Frame '{}' spans no valid days ({} to {}) - all counts are zero",
                frame.name, frame.outbound, frame.inbound
            ),
        )
    } else {
        let calculation = evaluate(frame, count, total_days, location, rules);
        let reasoning = format!(
            "{} crew x {} days at {} event: {} per-diems, {} hotel nights, {} inner trips, {} outside trips",
            count,
            total_days,
            location.as_str(),
            calculation.per_diems,
            calculation.hotel_nights,
            calculation.inner_trips,
            calculation.outside_trips
        );
        (calculation, reasoning)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: CREW_FRAME_RULE_ID.to_string(),
        rule_name: "Crew Frame Rules".to_string(),
        input: serde_json::json!({
            "frame_id": frame.id,
            "frame_name": frame.name,
            "location": location.as_str(),
            "outbound": frame.outbound,
            "inbound": frame.inbound,
            "count": frame.count,
            "total_days": total_days,
            "outbound_travel_day": frame.outbound_travel_day,
            "inbound_travel_day": frame.inbound_travel_day
        }),
        output: serde_json::json!({
            "crew_count": calculation.crew_count,
            "per_diems": calculation.per_diems,
            "hotel_nights": calculation.hotel_nights,
            "inner_trips": calculation.inner_trips,
            "outside_trips": calculation.outside_trips
        }),
        reasoning,
    };

    CrewFrameResult {
        calculation,
        audit_step,
    }
}

fn evaluate(
    frame: &CrewFrame,
    count: u64,
    total_days: u64,
    location: EventLocation,
    rules: &TripRules,
) -> CrewCalculation {
    let per_diems = total_days.saturating_mul(count);

    let (hotel_nights, inner_trips, outside_trips) = match location {
        EventLocation::Local => (0, local_inner_trips(frame, count, total_days), 0),
        EventLocation::Remote => (
            total_days.saturating_sub(1).saturating_mul(count),
            remote_inner_trips(frame, count, total_days),
            rules.outside_trips_per_frame,
        ),
    };

    CrewCalculation {
        crew_count: count,
        per_diems,
        hotel_nights,
        inner_trips,
        outside_trips,
    }
}

/// Daily home-venue round trips, less one round trip per travel day.
fn local_inner_trips(frame: &CrewFrame, count: u64, total_days: u64) -> u64 {
    let round_trip = count.saturating_mul(2);
    let travel_days = u64::from(frame.outbound_travel_day) + u64::from(frame.inbound_travel_day);

    total_days
        .saturating_mul(round_trip)
        .saturating_sub(travel_days.saturating_mul(round_trip))
}

/// Venue-hotel legs, banded by frame length.
fn remote_inner_trips(frame: &CrewFrame, count: u64, total_days: u64) -> u64 {
    let arrival_leg = if frame.outbound_travel_day { 0 } else { count };
    let departure_leg = if frame.inbound_travel_day { 0 } else { count };

    match total_days {
        0 => 0,
        1 => {
            if frame.outbound_travel_day || frame.inbound_travel_day {
                0
            } else {
                count
            }
        }
        2 => arrival_leg + departure_leg,
        days => {
            let middle_days = days - 2;
            (arrival_leg + departure_leg)
                .saturating_add(middle_days.saturating_mul(count.saturating_mul(2)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_frame(outbound: &str, inbound: &str, count: i64) -> CrewFrame {
        CrewFrame {
            id: "crew_001".to_string(),
            name: "Camera".to_string(),
            outbound: outbound.to_string(),
            inbound: inbound.to_string(),
            count,
            crew_names: vec![],
            outbound_travel_day: false,
            inbound_travel_day: false,
        }
    }

    fn with_flags(mut frame: CrewFrame, outbound: bool, inbound: bool) -> CrewFrame {
        frame.outbound_travel_day = outbound;
        frame.inbound_travel_day = inbound;
        frame
    }

    fn calc(frame: &CrewFrame, location: EventLocation) -> CrewCalculation {
        calculate_crew_frame(frame, location, &TripRules::default(), 1).calculation
    }

    // ==========================================================================
    // Degenerate frames
    // ==========================================================================

    #[test]
    fn test_zero_count_is_all_zero() {
        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-06", 0), true, true);

        assert_eq!(calc(&frame, EventLocation::Local), CrewCalculation::default());
        assert_eq!(calc(&frame, EventLocation::Remote), CrewCalculation::default());
    }

    #[test]
    fn test_negative_count_is_all_zero() {
        let frame = create_test_frame("2026-03-02", "2026-03-06", -3);

        assert_eq!(calc(&frame, EventLocation::Remote), CrewCalculation::default());
    }

    #[test]
    fn test_inverted_range_is_all_zero_including_outside_trips() {
        let frame = create_test_frame("2026-03-06", "2026-03-02", 3);

        assert_eq!(calc(&frame, EventLocation::Remote), CrewCalculation::default());
    }

    #[test]
    fn test_missing_dates_are_all_zero() {
        let frame = create_test_frame("", "", 3);

        assert_eq!(calc(&frame, EventLocation::Local), CrewCalculation::default());
    }

    // ==========================================================================
    // Local events
    // ==========================================================================

    #[test]
    fn test_local_three_days_four_crew() {
        let frame = create_test_frame("2026-03-02", "2026-03-04", 4);
        let result = calc(&frame, EventLocation::Local);

        assert_eq!(result.crew_count, 4);
        assert_eq!(result.per_diems, 12);
        assert_eq!(result.hotel_nights, 0);
        assert_eq!(result.inner_trips, 24);
        assert_eq!(result.outside_trips, 0);
    }

    #[test]
    fn test_local_travel_days_remove_round_trips() {
        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-04", 4), true, false);
        assert_eq!(calc(&frame, EventLocation::Local).inner_trips, 16);

        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-04", 4), true, true);
        assert_eq!(calc(&frame, EventLocation::Local).inner_trips, 8);
    }

    #[test]
    fn test_local_single_day_with_both_flags_floors_at_zero() {
        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-02", 3), true, true);
        let result = calc(&frame, EventLocation::Local);

        assert_eq!(result.inner_trips, 0);
        assert_eq!(result.per_diems, 3);
    }

    #[test]
    fn test_local_has_no_hotel_nights() {
        let frame = create_test_frame("2026-03-02", "2026-03-10", 5);

        assert_eq!(calc(&frame, EventLocation::Local).hotel_nights, 0);
    }

    // ==========================================================================
    // Remote events
    // ==========================================================================

    #[test]
    fn test_remote_one_day_two_crew() {
        let frame = create_test_frame("2026-03-02", "2026-03-02", 2);
        let result = calc(&frame, EventLocation::Remote);

        assert_eq!(result.inner_trips, 2);
        assert_eq!(result.hotel_nights, 0);
        assert_eq!(result.outside_trips, 2);
        assert_eq!(result.per_diems, 2);
    }

    #[test]
    fn test_remote_one_day_with_any_flag_has_no_legs() {
        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-02", 2), false, true);
        assert_eq!(calc(&frame, EventLocation::Remote).inner_trips, 0);

        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-02", 2), true, false);
        assert_eq!(calc(&frame, EventLocation::Remote).inner_trips, 0);
    }

    #[test]
    fn test_remote_two_days() {
        let frame = create_test_frame("2026-03-02", "2026-03-03", 3);
        assert_eq!(calc(&frame, EventLocation::Remote).inner_trips, 6);

        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-03", 3), true, false);
        assert_eq!(calc(&frame, EventLocation::Remote).inner_trips, 3);

        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-03", 3), true, true);
        assert_eq!(calc(&frame, EventLocation::Remote).inner_trips, 0);
    }

    #[test]
    fn test_remote_three_days_both_flags() {
        let frame = with_flags(create_test_frame("2026-03-02", "2026-03-04", 5), true, true);
        let result = calc(&frame, EventLocation::Remote);

        assert_eq!(result.inner_trips, 10);
        assert_eq!(result.hotel_nights, 10);
        assert_eq!(result.outside_trips, 2);
    }

    #[test]
    fn test_remote_five_days_no_flags() {
        // 1 arrival + 1 departure + 3 middle days x 2 legs, per person
        let frame = create_test_frame("2026-03-02", "2026-03-06", 2);
        let result = calc(&frame, EventLocation::Remote);

        assert_eq!(result.inner_trips, 2 + 2 + 12);
        assert_eq!(result.hotel_nights, 8);
        assert_eq!(result.per_diems, 10);
    }

    #[test]
    fn test_remote_outside_trips_ignore_headcount() {
        let small = create_test_frame("2026-03-02", "2026-03-04", 1);
        let large = create_test_frame("2026-03-02", "2026-03-04", 40);

        assert_eq!(calc(&small, EventLocation::Remote).outside_trips, 2);
        assert_eq!(calc(&large, EventLocation::Remote).outside_trips, 2);
    }

    #[test]
    fn test_configured_outside_trips() {
        let rules = TripRules {
            outside_trips_per_frame: 4,
            ..TripRules::default()
        };
        let frame = create_test_frame("2026-03-02", "2026-03-04", 3);

        let result = calculate_crew_frame(&frame, EventLocation::Remote, &rules, 1);
        assert_eq!(result.calculation.outside_trips, 4);
    }

    // ==========================================================================
    // Audit step
    // ==========================================================================

    #[test]
    fn test_audit_step_records_inputs_and_outputs() {
        let frame = create_test_frame("2026-03-02", "2026-03-04", 4);
        let result = calculate_crew_frame(&frame, EventLocation::Local, &TripRules::default(), 7);

        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, CREW_FRAME_RULE_ID);
        assert_eq!(result.audit_step.input["frame_id"].as_str().unwrap(), "crew_001");
        assert_eq!(result.audit_step.input["location"].as_str().unwrap(), "local");
        assert_eq!(result.audit_step.input["total_days"].as_u64().unwrap(), 3);
        assert_eq!(result.audit_step.output["inner_trips"].as_u64().unwrap(), 24);
        assert!(result.audit_step.reasoning.contains("4 crew x 3 days"));
    }

    #[test]
    fn test_audit_reasoning_for_empty_frame() {
        let frame = create_test_frame("2026-03-02", "2026-03-04", 0);
        let result = calculate_crew_frame(&frame, EventLocation::Local, &TripRules::default(), 1);

        assert!(result.audit_step.reasoning.contains("no crew"));
    }

    #[test]
    fn test_audit_reasoning_for_inverted_range() {
        let frame = create_test_frame("2026-03-04", "2026-03-02", 2);
        let result = calculate_crew_frame(&frame, EventLocation::Local, &TripRules::default(), 1);

        assert!(result.audit_step.reasoning.contains("no valid days"));
    }

    // ==========================================================================
    // Properties
    // ==========================================================================

    fn frame_strategy() -> impl Strategy<Value = (i64, i64, u32, bool, bool)> {
        (0i64..200, 0i64..40, 0u32..4, any::<bool>(), any::<bool>())
    }

    fn build_frame(count: i64, span: i64, start_offset: u32, out_flag: bool, in_flag: bool) -> CrewFrame {
        let start = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
            + chrono::Duration::days(i64::from(start_offset));
        let end = start + chrono::Duration::days(span - 1);
        with_flags(
            create_test_frame(
                &start.format("%Y-%m-%d").to_string(),
                &end.format("%Y-%m-%d").to_string(),
                count,
            ),
            out_flag,
            in_flag,
        )
    }

    proptest! {
        #[test]
        fn prop_recalculation_is_identical(
            (count, span, offset, out_flag, in_flag) in frame_strategy(),
            remote in any::<bool>(),
        ) {
            let location = if remote { EventLocation::Remote } else { EventLocation::Local };
            let frame = build_frame(count, span, offset, out_flag, in_flag);
            let rules = TripRules::default();

            prop_assert_eq!(
                calculate_crew_frame(&frame, location, &rules, 1),
                calculate_crew_frame(&frame, location, &rules, 1)
            );
        }

        #[test]
        fn prop_more_crew_never_decreases_counts(
            (count, span, offset, out_flag, in_flag) in frame_strategy(),
            extra in 1i64..50,
            remote in any::<bool>(),
        ) {
            let location = if remote { EventLocation::Remote } else { EventLocation::Local };
            let smaller = calc(&build_frame(count, span, offset, out_flag, in_flag), location);
            let larger = calc(&build_frame(count + extra, span, offset, out_flag, in_flag), location);

            prop_assert!(larger.per_diems >= smaller.per_diems);
            prop_assert!(larger.hotel_nights >= smaller.hotel_nights);
            prop_assert!(larger.inner_trips >= smaller.inner_trips);
            prop_assert!(larger.outside_trips >= smaller.outside_trips);
        }

        #[test]
        fn prop_local_trips_never_exceed_daily_round_trips(
            (count, span, offset, out_flag, in_flag) in frame_strategy(),
        ) {
            let frame = build_frame(count, span, offset, out_flag, in_flag);
            let result = calc(&frame, EventLocation::Local);
            let total_days = days_between(&frame.outbound, &frame.inbound);

            prop_assert!(result.inner_trips <= total_days * 2 * frame.headcount());
            prop_assert_eq!(result.outside_trips, 0);
        }
    }
}
