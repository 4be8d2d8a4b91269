//! Report row building.
//!
//! Turns an event plan and its calculation into report rows. Frame rows
//! carry the frame's figures; per-person rows split them evenly across
//! the headcount and drop the trip columns, since trips are shared.
//! Per-person names follow the frame's normalized name list: extra names
//! are dropped and missing ones are blank.
//!
//! A report is sized before any row is built. Per-person reports grow with
//! headcount, so the configured [`ReportLimits`] cap both the row count and
//! the hotel dates listed across all rows.

use chrono::{Days, NaiveDate};

use crate::calculation::parse_frame_date;
use crate::config::ReportLimits;
use crate::error::{EngineError, EngineResult};
use crate::models::{CrewFrame, EventCalculation, EventPlan, FrameKind, LabourFrame};

use super::types::{Report, ReportOptions, ReportRow, ReportTotals};

/// Default cap on the rows of one report.
pub const DEFAULT_MAX_REPORT_ROWS: u64 = 10_000;

/// Default cap on the hotel dates listed across one report.
pub const DEFAULT_MAX_HOTEL_DATES: u64 = 1_000_000;

/// Returns the `nights` consecutive dates starting at `outbound`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use logistics_engine::report::hotel_dates;
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
/// let dates = hotel_dates(start, 3);
///
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
/// ```
pub fn hotel_dates(outbound: NaiveDate, nights: u64) -> Vec<NaiveDate> {
    (0..nights)
        .map_while(|offset| outbound.checked_add_days(Days::new(offset)))
        .collect()
}

/// Builds the report for `plan` from its already computed `calculation`.
///
/// `calculation` must come from the same plan; its per-frame records are
/// matched to frames by position.
///
/// # Errors
///
/// Returns `ReportTooLarge` if the report would hold more rows or hotel
/// dates than `options.limits` allows. Nothing is built in that case.
pub fn build_report(
    plan: &EventPlan,
    calculation: &EventCalculation,
    options: &ReportOptions,
) -> EngineResult<Report> {
    let crew = plan
        .crew_frames
        .iter()
        .zip(&calculation.crew_calculations)
        .map(|(frame, calc)| PlannedFrame {
            frame: FrameRef::Crew(frame),
            figures: FrameFigures {
                per_diems: calc.per_diems,
                hotel_nights: calc.hotel_nights,
                inner_trips: Some(calc.inner_trips),
                outside_trips: calc.outside_trips,
            },
        });
    let labour = plan
        .labour_frames
        .iter()
        .zip(&calculation.labour_calculations)
        .map(|(frame, calc)| PlannedFrame {
            frame: FrameRef::Labour(frame),
            figures: FrameFigures {
                per_diems: calc.per_diems,
                hotel_nights: calc.hotel_nights,
                inner_trips: None,
                outside_trips: calc.transport_trips,
            },
        });
    let planned: Vec<PlannedFrame<'_>> = crew
        .chain(labour)
        .filter(|p| p.frame.headcount() > 0)
        .collect();

    check_size(&planned, options.per_person, &options.limits)?;

    let mut rows: Vec<ReportRow> = Vec::new();
    for p in &planned {
        push_rows(&mut rows, p, options.per_person);
    }

    // stable: crew before labour on the same date
    rows.sort_by_key(|row| match parse_frame_date(&row.outbound) {
        Some(date) => (0u8, Some(date)),
        None => (1u8, None),
    });

    let totals = &calculation.totals;
    let location_label = if options.location_label.is_empty() {
        plan.location.to_string()
    } else {
        options.location_label.clone()
    };

    Ok(Report {
        event_name: plan.event_name.clone(),
        location: plan.location,
        location_label,
        per_person: options.per_person,
        rows,
        totals: ReportTotals {
            per_diems: totals.total_per_diems,
            hotel_nights: totals.total_hotel_nights,
            inner_trips: totals.total_inner_trips,
            outside_trips: totals
                .total_outside_trips
                .saturating_add(totals.total_labour_trips),
            cars_needed: totals.total_cars_needed,
        },
    })
}

#[derive(Clone, Copy)]
enum FrameRef<'a> {
    Crew(&'a CrewFrame),
    Labour(&'a LabourFrame),
}

impl FrameRef<'_> {
    fn kind(self) -> FrameKind {
        match self {
            FrameRef::Crew(_) => FrameKind::Crew,
            FrameRef::Labour(_) => FrameKind::Labour,
        }
    }

    fn name(&self) -> &str {
        match self {
            FrameRef::Crew(f) => &f.name,
            FrameRef::Labour(f) => &f.name,
        }
    }

    fn outbound(&self) -> &str {
        match self {
            FrameRef::Crew(f) => &f.outbound,
            FrameRef::Labour(f) => &f.outbound,
        }
    }

    fn inbound(&self) -> &str {
        match self {
            FrameRef::Crew(f) => &f.inbound,
            FrameRef::Labour(f) => &f.inbound,
        }
    }

    fn mode(self) -> &'static str {
        match self {
            FrameRef::Crew(_) => "",
            FrameRef::Labour(f) => f.mode.label(),
        }
    }

    fn headcount(self) -> u64 {
        match self {
            FrameRef::Crew(f) => f.headcount(),
            FrameRef::Labour(f) => f.headcount(),
        }
    }

    fn normalized_names(self) -> Vec<String> {
        match self {
            FrameRef::Crew(f) => f.normalized_names(),
            FrameRef::Labour(f) => f.normalized_names(),
        }
    }

    fn joined_names(self) -> String {
        match self {
            FrameRef::Crew(f) => f.joined_names(),
            FrameRef::Labour(f) => f.joined_names(),
        }
    }
}

#[derive(Clone, Copy)]
struct FrameFigures {
    per_diems: u64,
    hotel_nights: u64,
    inner_trips: Option<u64>,
    outside_trips: u64,
}

struct PlannedFrame<'a> {
    frame: FrameRef<'a>,
    figures: FrameFigures,
}

impl PlannedFrame<'_> {
    /// Rows the frame contributes. Zero-headcount frames are filtered out earlier.
    fn row_count(&self, per_person: bool) -> u64 {
        if per_person { self.frame.headcount() } else { 1 }
    }

    fn nights_per_person(&self) -> u64 {
        self.figures.hotel_nights / self.frame.headcount().max(1)
    }

    fn hotel_dates(&self) -> Vec<NaiveDate> {
        parse_frame_date(self.frame.outbound())
            .map(|outbound| hotel_dates(outbound, self.nights_per_person()))
            .unwrap_or_default()
    }
}

fn check_size(
    planned: &[PlannedFrame<'_>],
    per_person: bool,
    limits: &ReportLimits,
) -> EngineResult<()> {
    let mut rows = 0u64;
    let mut dates = 0u64;

    for p in planned {
        let frame_rows = p.row_count(per_person);
        rows = rows.saturating_add(frame_rows);
        if parse_frame_date(p.frame.outbound()).is_some() {
            dates = dates.saturating_add(frame_rows.saturating_mul(p.nights_per_person()));
        }
    }

    if rows > limits.max_rows {
        return Err(EngineError::ReportTooLarge {
            measure: "rows".to_string(),
            size: rows,
            limit: limits.max_rows,
        });
    }
    if dates > limits.max_hotel_dates {
        return Err(EngineError::ReportTooLarge {
            measure: "hotel dates".to_string(),
            size: dates,
            limit: limits.max_hotel_dates,
        });
    }
    Ok(())
}

fn push_rows(rows: &mut Vec<ReportRow>, planned: &PlannedFrame<'_>, per_person: bool) {
    let frame = planned.frame;
    let figures = planned.figures;
    let dates = planned.hotel_dates();

    let row = |names: String,
               per_diems: u64,
               hotel_nights: u64,
               inner_trips: Option<u64>,
               outside_trips: Option<u64>| ReportRow {
        kind: frame.kind(),
        frame_name: frame.name().to_string(),
        names,
        outbound: frame.outbound().to_string(),
        inbound: frame.inbound().to_string(),
        mode: frame.mode().to_string(),
        per_diems,
        hotel_nights,
        hotel_dates: dates.clone(),
        inner_trips,
        outside_trips,
    };

    if per_person {
        let headcount = frame.headcount();
        let per_diems_per_person = figures.per_diems / headcount;
        let nights_per_person = planned.nights_per_person();
        for name in frame.normalized_names() {
            rows.push(row(
                name.trim().to_string(),
                per_diems_per_person,
                nights_per_person,
                None,
                None,
            ));
        }
    } else {
        rows.push(row(
            frame.joined_names(),
            figures.per_diems,
            figures.hotel_nights,
            figures.inner_trips,
            Some(figures.outside_trips),
        ));
    }
}
