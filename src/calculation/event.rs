//! Whole-event evaluation.
//!
//! Runs every frame through its rule evaluator, aggregates the results,
//! and collects the audit steps and input warnings along the way.

use crate::config::TripRules;
use crate::models::{
    AuditStep, AuditWarning, CrewCalculation, EventCalculation, EventPlan, FrameKind,
    LabourCalculation,
};

use super::aggregation::calculate_totals;
use super::crew_rules::calculate_crew_frame;
use super::date_span::parse_frame_date;
use super::labour_rules::calculate_labour_frame;

/// Warning code for a date that is present but cannot be read.
pub const WARNING_INVALID_DATE: &str = "INVALID_DATE";
/// Warning code for a staffed frame with no date.
pub const WARNING_MISSING_DATE: &str = "MISSING_DATE";
/// Warning code for a frame whose inbound date precedes its outbound date.
pub const WARNING_INVERTED_RANGE: &str = "INVERTED_RANGE";
/// Warning code for a frame naming more people than its headcount.
pub const WARNING_EXCESS_NAMES: &str = "EXCESS_NAMES";

/// The full evaluation of one event plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEvaluation {
    /// Per-frame calculations and totals.
    pub calculation: EventCalculation,
    /// Audit steps in evaluation order: crew frames, labour frames, totals.
    pub steps: Vec<AuditStep>,
    /// Input problems that were absorbed rather than rejected.
    pub warnings: Vec<AuditWarning>,
}

/// Evaluates every frame in `plan` and aggregates the totals.
///
/// The result depends only on `plan` and `rules`; evaluating an unchanged
/// plan twice yields identical values.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use logistics_engine::calculation::calculate_event;
/// use logistics_engine::config::TripRules;
/// use logistics_engine::models::{EventLocation, EventPlan};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let plan = EventPlan::new("Expo", EventLocation::Local, today);
///
/// let evaluation = calculate_event(&plan, &TripRules::default());
/// assert_eq!(evaluation.calculation.crew_calculations.len(), 1);
/// assert_eq!(evaluation.calculation.totals.total_per_diems, 0);
/// ```
pub fn calculate_event(plan: &EventPlan, rules: &TripRules) -> EventEvaluation {
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let mut crew_calculations: Vec<CrewCalculation> = Vec::with_capacity(plan.crew_frames.len());
    for frame in &plan.crew_frames {
        warnings.extend(frame_warnings(
            FrameKind::Crew,
            &frame.name,
            &frame.outbound,
            &frame.inbound,
            frame.headcount(),
            &frame.crew_names,
        ));

        let result = calculate_crew_frame(frame, plan.location, rules, step_number);
        crew_calculations.push(result.calculation);
        steps.push(result.audit_step);
        step_number += 1;
    }

    let mut labour_calculations: Vec<LabourCalculation> =
        Vec::with_capacity(plan.labour_frames.len());
    for frame in &plan.labour_frames {
        warnings.extend(frame_warnings(
            FrameKind::Labour,
            &frame.name,
            &frame.outbound,
            &frame.inbound,
            frame.headcount(),
            &frame.labour_names,
        ));

        let result = calculate_labour_frame(frame, plan.location, rules, step_number);
        labour_calculations.push(result.calculation);
        steps.push(result.audit_step);
        step_number += 1;
    }

    let totals_result = calculate_totals(
        &plan.crew_frames,
        &crew_calculations,
        &labour_calculations,
        rules,
        step_number,
    );
    steps.push(totals_result.audit_step);

    EventEvaluation {
        calculation: EventCalculation {
            crew_calculations,
            labour_calculations,
            totals: totals_result.totals,
        },
        steps,
        warnings,
    }
}

/// Date and name checks for one frame. Frames with nobody in them are
/// only checked for names.
fn frame_warnings(
    kind: FrameKind,
    name: &str,
    outbound: &str,
    inbound: &str,
    headcount: u64,
    names: &[String],
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if headcount > 0 {
        let mut parsed = Vec::with_capacity(2);
        for (field, value) in [("outbound", outbound), ("inbound", inbound)] {
            if value.trim().is_empty() {
                warnings.push(AuditWarning {
                    code: WARNING_MISSING_DATE.to_string(),
                    message: format!("{} frame '{}' has no {} date", kind, name, field),
                    severity: "medium".to_string(),
                });
                parsed.push(None);
                continue;
            }

            let date = parse_frame_date(value);
            if date.is_none() {
                warnings.push(AuditWarning {
                    code: WARNING_INVALID_DATE.to_string(),
                    message: format!(
                        "{} frame '{}' has an unreadable {} date '{}'",
                        kind, name, field, value
                    ),
                    severity: "high".to_string(),
                });
            }
            parsed.push(date);
        }

        if let [Some(out), Some(inn)] = parsed[..] {
            if inn < out {
                warnings.push(AuditWarning {
                    code: WARNING_INVERTED_RANGE.to_string(),
                    message: format!(
                        "{} frame '{}' returns on {} before leaving on {}; counted as zero days",
                        kind, name, inbound, outbound
                    ),
                    severity: "high".to_string(),
                });
            }
        }
    }

    let named = names.iter().filter(|n| !n.trim().is_empty()).count();
    if u64::try_from(named).unwrap_or(u64::MAX) > headcount {
        warnings.push(AuditWarning {
            code: WARNING_EXCESS_NAMES.to_string(),
            message: format!(
                "{} frame '{}' names {} people but counts {}; extra names are dropped",
                kind, name, named, headcount
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
