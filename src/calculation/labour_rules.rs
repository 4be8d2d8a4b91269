//! Labour frame rules.
//!
//! Labour travels in shared vans, so transport trips are counted per van
//! rather than per person. Hotel stays are opt-in per frame and only
//! accrue at remote events.

use crate::config::TripRules;
use crate::models::{AuditStep, EventLocation, LabourCalculation, LabourFrame, LabourMode};

use super::date_span::days_between;
use super::vehicles::vehicles_needed;

/// The rule id recorded in the audit trace.
pub const LABOUR_FRAME_RULE_ID: &str = "labour_frame_rules";

/// The result of evaluating one labour frame, with its audit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabourFrameResult {
    /// The derived counts.
    pub calculation: LabourCalculation,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Evaluates the labour rules for one frame.
///
/// # Rules
///
/// - A frame with no labour yields all zeros.
/// - Per-diems: one per person per day in range.
/// - Vans: `ceil(count / labour_van_capacity)`.
/// - Transport trips by mode:
///   - `RoundTrip`: `days * 2 * vans`
///   - `OneWayOut`: `vans`
///   - `NoTrip`: `0`
/// - Hotel nights: `(days - 1) * count` when the frame requires a hotel, the
///   event is remote and the range is valid; otherwise `0`.
///
/// # Example
///
/// ```
/// use logistics_engine::calculation::calculate_labour_frame;
/// use logistics_engine::config::TripRules;
/// use logistics_engine::models::{EventLocation, LabourFrame, LabourMode};
///
/// let frame = LabourFrame {
///     id: "l1".to_string(),
///     name: "Riggers".to_string(),
///     outbound: "2026-03-02".to_string(),
///     inbound: "2026-03-03".to_string(),
///     count: 12,
///     labour_names: vec![],
///     mode: LabourMode::RoundTrip,
///     hotel_required: false,
/// };
///
/// let result = calculate_labour_frame(&frame, EventLocation::Local, &TripRules::default(), 1);
/// assert_eq!(result.calculation.transport_trips, 12);
/// assert_eq!(result.calculation.per_diems, 24);
/// ```
pub fn calculate_labour_frame(
    frame: &LabourFrame,
    location: EventLocation,
    rules: &TripRules,
    step_number: u32,
) -> LabourFrameResult {
    let count = frame.headcount();
    let days = days_between(&frame.outbound, &frame.inbound);
    let vans = vehicles_needed(count, rules.vehicles.labour_van_capacity);

    let (calculation, reasoning) = if count == 0 {
        (
            LabourCalculation::default(),
            format!("Frame '{}' has no labour - all counts are zero", frame.name),
        )
    } else {
        let transport_trips = match frame.mode {
            LabourMode::RoundTrip => days.saturating_mul(2).saturating_mul(vans),
            LabourMode::OneWayOut => vans,
            LabourMode::NoTrip => 0,
        };

        let hotel_nights = if frame.hotel_required && location.has_hotel_stays() && days > 0 {
            (days - 1).saturating_mul(count)
        } else {
            0
        };

        let calculation = LabourCalculation {
            labour_count: count,
            per_diems: days.saturating_mul(count),
            hotel_nights,
            transport_trips,
        };

        let reasoning = format!(
            "{} labour x {} days in {} van(s) ({}): {} per-diems, {} hotel nights, {} transport trips",
            count,
            days,
            vans,
            frame.mode.as_str(),
            calculation.per_diems,
            calculation.hotel_nights,
            calculation.transport_trips
        );
        (calculation, reasoning)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: LABOUR_FRAME_RULE_ID.to_string(),
        rule_name: "Labour Frame Rules".to_string(),
        input: serde_json::json!({
            "frame_id": frame.id,
            "frame_name": frame.name,
            "location": location.as_str(),
            "outbound": frame.outbound,
            "inbound": frame.inbound,
            "count": frame.count,
            "days": days,
            "mode": frame.mode.as_str(),
            "hotel_required": frame.hotel_required,
            "van_capacity": rules.vehicles.labour_van_capacity
        }),
        output: serde_json::json!({
            "labour_count": calculation.labour_count,
            "vans": if count == 0 { 0 } else { vans },
            "per_diems": calculation.per_diems,
            "hotel_nights": calculation.hotel_nights,
            "transport_trips": calculation.transport_trips
        }),
        reasoning,
    };

    LabourFrameResult {
        calculation,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_frame(
        outbound: &str,
        inbound: &str,
        count: i64,
        mode: LabourMode,
        hotel_required: bool,
    ) -> LabourFrame {
        LabourFrame {
            id: "labour_001".to_string(),
            name: "Riggers".to_string(),
            outbound: outbound.to_string(),
            inbound: inbound.to_string(),
            count,
            labour_names: vec![],
            mode,
            hotel_required,
        }
    }

    fn calc(frame: &LabourFrame, location: EventLocation) -> LabourCalculation {
        calculate_labour_frame(frame, location, &TripRules::default(), 1).calculation
    }

    #[test]
    fn test_zero_count_is_all_zero() {
        for mode in [LabourMode::RoundTrip, LabourMode::OneWayOut, LabourMode::NoTrip] {
            let frame = create_test_frame("2026-03-02", "2026-03-05", 0, mode, true);
            assert_eq!(calc(&frame, EventLocation::Remote), LabourCalculation::default());
        }
    }

    #[test]
    fn test_negative_count_is_all_zero() {
        let frame = create_test_frame("2026-03-02", "2026-03-05", -4, LabourMode::OneWayOut, true);

        assert_eq!(calc(&frame, EventLocation::Remote), LabourCalculation::default());
    }

    #[test]
    fn test_round_trip_twelve_over_two_days() {
        // 3 vans, 2 legs a day, 2 days
        let frame = create_test_frame("2026-03-02", "2026-03-03", 12, LabourMode::RoundTrip, false);
        let result = calc(&frame, EventLocation::Local);

        assert_eq!(result.labour_count, 12);
        assert_eq!(result.transport_trips, 12);
        assert_eq!(result.per_diems, 24);
        assert_eq!(result.hotel_nights, 0);
    }

    #[test]
    fn test_one_way_out_is_one_leg_per_van() {
        let frame = create_test_frame("2026-03-02", "2026-03-06", 6, LabourMode::OneWayOut, false);

        assert_eq!(calc(&frame, EventLocation::Local).transport_trips, 2);
    }

    #[test]
    fn test_no_trip_has_no_transport() {
        let frame = create_test_frame("2026-03-02", "2026-03-06", 20, LabourMode::NoTrip, false);
        let result = calc(&frame, EventLocation::Local);

        assert_eq!(result.transport_trips, 0);
        assert_eq!(result.per_diems, 100);
    }

    #[test]
    fn test_hotel_requires_flag_and_remote() {
        let with_hotel = create_test_frame("2026-03-02", "2026-03-04", 3, LabourMode::RoundTrip, true);
        let without_hotel =
            create_test_frame("2026-03-02", "2026-03-04", 3, LabourMode::RoundTrip, false);

        assert_eq!(calc(&with_hotel, EventLocation::Remote).hotel_nights, 6);
        assert_eq!(calc(&with_hotel, EventLocation::Local).hotel_nights, 0);
        assert_eq!(calc(&without_hotel, EventLocation::Remote).hotel_nights, 0);
    }

    #[test]
    fn test_inverted_range_keeps_one_way_legs() {
        let frame = create_test_frame("2026-03-06", "2026-03-02", 6, LabourMode::OneWayOut, true);
        let result = calc(&frame, EventLocation::Remote);

        assert_eq!(result.per_diems, 0);
        assert_eq!(result.hotel_nights, 0);
        assert_eq!(result.transport_trips, 2);
    }

    #[test]
    fn test_inverted_range_round_trip_is_zero() {
        let frame = create_test_frame("2026-03-06", "2026-03-02", 6, LabourMode::RoundTrip, true);

        assert_eq!(calc(&frame, EventLocation::Remote).transport_trips, 0);
    }

    #[test]
    fn test_configured_van_capacity() {
        let mut rules = TripRules::default();
        rules.vehicles.labour_van_capacity = 10;
        let frame = create_test_frame("2026-03-02", "2026-03-02", 12, LabourMode::RoundTrip, false);

        let result = calculate_labour_frame(&frame, EventLocation::Local, &rules, 1);
        assert_eq!(result.calculation.transport_trips, 4);
    }

    #[test]
    fn test_audit_step_records_vans_and_mode() {
        let frame = create_test_frame("2026-03-02", "2026-03-03", 12, LabourMode::RoundTrip, false);
        let result = calculate_labour_frame(&frame, EventLocation::Local, &TripRules::default(), 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, LABOUR_FRAME_RULE_ID);
        assert_eq!(result.audit_step.input["mode"].as_str().unwrap(), "round_trip");
        assert_eq!(result.audit_step.output["vans"].as_u64().unwrap(), 3);
        assert!(result.audit_step.reasoning.contains("3 van(s)"));
    }

    fn mode_strategy() -> impl Strategy<Value = LabourMode> {
        prop_oneof![
            Just(LabourMode::RoundTrip),
            Just(LabourMode::OneWayOut),
            Just(LabourMode::NoTrip),
        ]
    }

    fn build_frame(count: i64, span: i64, mode: LabourMode, hotel_required: bool) -> LabourFrame {
        let start = chrono::NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let end = start + chrono::Duration::days(span - 1);
        create_test_frame(
            &start.format("%Y-%m-%d").to_string(),
            &end.format("%Y-%m-%d").to_string(),
            count,
            mode,
            hotel_required,
        )
    }

    proptest! {
        #[test]
        fn prop_recalculation_is_identical(
            count in -5i64..200,
            span in 0i64..30,
            mode in mode_strategy(),
            hotel_required in any::<bool>(),
        ) {
            let frame = build_frame(count, span, mode, hotel_required);
            let rules = TripRules::default();

            prop_assert_eq!(
                calculate_labour_frame(&frame, EventLocation::Remote, &rules, 1),
                calculate_labour_frame(&frame, EventLocation::Remote, &rules, 1)
            );
        }

        #[test]
        fn prop_more_labour_never_decreases_counts(
            count in 0i64..200,
            extra in 1i64..50,
            span in 0i64..30,
            mode in mode_strategy(),
            hotel_required in any::<bool>(),
        ) {
            let smaller = calc(&build_frame(count, span, mode, hotel_required), EventLocation::Remote);
            let larger = calc(&build_frame(count + extra, span, mode, hotel_required), EventLocation::Remote);

            prop_assert!(larger.per_diems >= smaller.per_diems);
            prop_assert!(larger.hotel_nights >= smaller.hotel_nights);
            prop_assert!(larger.transport_trips >= smaller.transport_trips);
        }
    }
}
