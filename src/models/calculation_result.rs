//! Calculation result models for the Event Logistics Engine.
//!
//! This module contains the per-frame calculation records, the event-wide
//! totals, and the [`CalculationResult`] envelope returned by the API with
//! its audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EventLocation;

/// Derived counts for one crew frame.
///
/// # Example
///
/// ```
/// use logistics_engine::models::CrewCalculation;
///
/// let calc = CrewCalculation::default();
/// assert_eq!(calc.per_diems, 0);
/// assert_eq!(calc.outside_trips, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrewCalculation {
    /// Effective headcount (zero for degenerate frames).
    pub crew_count: u64,
    /// One per person per day in range.
    pub per_diems: u64,
    /// Person-nights in a hotel.
    pub hotel_nights: u64,
    /// Local legs between lodging and the venue.
    pub inner_trips: u64,
    /// Long-haul legs between the home base and a remote location.
    pub outside_trips: u64,
}

/// Derived counts for one labour frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabourCalculation {
    /// Effective headcount (zero for degenerate frames).
    pub labour_count: u64,
    /// One per person per day in range.
    pub per_diems: u64,
    /// Person-nights in a hotel.
    pub hotel_nights: u64,
    /// Van legs, counted per van rather than per person.
    pub transport_trips: u64,
}

/// Event-wide totals across every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TotalCalculation {
    /// Crew headcount across frames.
    pub total_crew_count: u64,
    /// Labour headcount across frames.
    pub total_labour_count: u64,
    /// Crew and labour per-diems.
    pub total_per_diems: u64,
    /// Crew and labour hotel nights.
    pub total_hotel_nights: u64,
    /// Crew inner trips.
    pub total_inner_trips: u64,
    /// Crew outside trips.
    pub total_outside_trips: u64,
    /// Labour transport trips.
    pub total_labour_trips: u64,
    /// Cars for crew, shared only between frames leaving on the same date.
    pub total_cars_needed: u64,
}

/// Per-frame calculations and totals for one event.
///
/// `crew_calculations[i]` belongs to crew frame `i`, and likewise for labour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventCalculation {
    /// One record per crew frame, in frame order.
    pub crew_calculations: Vec<CrewCalculation>,
    /// One record per labour frame, in frame order.
    pub labour_calculations: Vec<LabourCalculation>,
    /// Event-wide totals.
    pub totals: TotalCalculation,
}

/// A single step in the audit trace recording a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning about input that was absorbed rather than rejected.
///
/// Warnings never change a number; they tell the planner why a frame
/// came out as zero or why some of its names were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use logistics_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule applications.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The envelope the API returns for one event calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Display name of the event.
    pub event_name: String,
    /// The location class the rules were evaluated for.
    pub location: EventLocation,
    /// Per-frame calculations and totals.
    #[serde(flatten)]
    pub calculation: EventCalculation,
    /// Complete audit trace of rule applications.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_calculation() -> EventCalculation {
        EventCalculation {
            crew_calculations: vec![CrewCalculation {
                crew_count: 2,
                per_diems: 6,
                hotel_nights: 4,
                inner_trips: 8,
                outside_trips: 2,
            }],
            labour_calculations: vec![LabourCalculation {
                labour_count: 6,
                per_diems: 12,
                hotel_nights: 0,
                transport_trips: 2,
            }],
            totals: TotalCalculation {
                total_crew_count: 2,
                total_labour_count: 6,
                total_per_diems: 18,
                total_hotel_nights: 4,
                total_inner_trips: 8,
                total_outside_trips: 2,
                total_labour_trips: 2,
                total_cars_needed: 1,
            },
        }
    }

    #[test]
    fn test_default_calculations_are_zero() {
        assert_eq!(
            CrewCalculation::default(),
            CrewCalculation {
                crew_count: 0,
                per_diems: 0,
                hotel_nights: 0,
                inner_trips: 0,
                outside_trips: 0,
            }
        );
        assert_eq!(LabourCalculation::default().transport_trips, 0);
        assert_eq!(TotalCalculation::default().total_cars_needed, 0);
    }

    #[test]
    fn test_crew_calculation_serialization() {
        let calc = CrewCalculation {
            crew_count: 4,
            per_diems: 12,
            hotel_nights: 0,
            inner_trips: 24,
            outside_trips: 0,
        };

        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"per_diems\":12"));
        assert!(json.contains("\"inner_trips\":24"));
        assert!(json.contains("\"outside_trips\":0"));
    }

    #[test]
    fn test_totals_deserialization() {
        let json = r#"{
            "total_crew_count": 8,
            "total_labour_count": 12,
            "total_per_diems": 40,
            "total_hotel_nights": 10,
            "total_inner_trips": 30,
            "total_outside_trips": 4,
            "total_labour_trips": 12,
            "total_cars_needed": 5
        }"#;

        let totals: TotalCalculation = serde_json::from_str(json).unwrap();
        assert_eq!(totals.total_per_diems, 40);
        assert_eq!(totals.total_cars_needed, 5);
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "crew_frame".to_string(),
            rule_name: "Crew Frame Rules".to_string(),
            input: serde_json::json!({"count": 4}),
            output: serde_json::json!({"per_diems": 12}),
            reasoning: "3 days x 4 crew".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"crew_frame\""));
        assert!(json.contains("\"rule_name\":\"Crew Frame Rules\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "INVERTED_RANGE".to_string(),
            message: "Crew frame 'Riggers' ends before it starts".to_string(),
            severity: "medium".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"INVERTED_RANGE\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }

    #[test]
    fn test_calculation_result_flattens_calculation() {
        let result = CalculationResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-03-02T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            event_name: "Expo".to_string(),
            location: EventLocation::Remote,
            calculation: create_sample_calculation(),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 5,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"location\":\"remote\""));
        assert!(json.contains("\"crew_calculations\":["));
        assert!(json.contains("\"labour_calculations\":["));
        assert!(json.contains("\"totals\":{"));
        assert!(!json.contains("\"calculation\":"));
    }

    #[test]
    fn test_calculation_result_deserialization() {
        let json = r#"{
            "calculation_id": "12345678-1234-1234-1234-123456789012",
            "timestamp": "2026-03-02T10:00:00Z",
            "engine_version": "0.1.0",
            "event_name": "Expo",
            "location": "local",
            "crew_calculations": [],
            "labour_calculations": [],
            "totals": {
                "total_crew_count": 0,
                "total_labour_count": 0,
                "total_per_diems": 0,
                "total_hotel_nights": 0,
                "total_inner_trips": 0,
                "total_outside_trips": 0,
                "total_labour_trips": 0,
                "total_cars_needed": 0
            },
            "audit_trace": {
                "steps": [],
                "warnings": [],
                "duration_us": 0
            }
        }"#;

        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.event_name, "Expo");
        assert_eq!(result.location, EventLocation::Local);
        assert!(result.calculation.crew_calculations.is_empty());
        assert_eq!(result.calculation.totals, TotalCalculation::default());
    }
}
