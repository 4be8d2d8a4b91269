//! Report record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ReportLimits;
use crate::models::{EventLocation, FrameKind};

/// Options controlling how a report is laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// One row per person instead of one row per frame.
    #[serde(default)]
    pub per_person: bool,
    /// Display label for the event location. Falls back to the location's
    /// own name when empty.
    #[serde(default)]
    pub location_label: String,
    /// Size limits the report must stay within.
    #[serde(default)]
    pub limits: ReportLimits,
}

/// One line of the logistics report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Whether the row describes crew or labour.
    pub kind: FrameKind,
    /// The frame the row was built from.
    pub frame_name: String,
    /// Names on the row, comma separated.
    pub names: String,
    /// Outbound date as entered.
    pub outbound: String,
    /// Inbound date as entered.
    pub inbound: String,
    /// Transport mode label; blank for crew.
    pub mode: String,
    /// Per-diems on the row.
    pub per_diems: u64,
    /// Hotel nights on the row.
    pub hotel_nights: u64,
    /// The nights one person spends in a hotel, from the outbound date.
    pub hotel_dates: Vec<NaiveDate>,
    /// Crew inner trips. `None` for labour and per-person rows.
    pub inner_trips: Option<u64>,
    /// Crew outside trips or labour transport trips. `None` for per-person rows.
    pub outside_trips: Option<u64>,
}

/// The totals line of the logistics report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// All per-diems.
    pub per_diems: u64,
    /// All hotel nights.
    pub hotel_nights: u64,
    /// Crew inner trips.
    pub inner_trips: u64,
    /// Crew outside trips plus labour transport trips.
    pub outside_trips: u64,
    /// Crew cars.
    pub cars_needed: u64,
}

/// A tabular logistics report for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Display name of the event.
    pub event_name: String,
    /// The location class of the event.
    pub location: EventLocation,
    /// Display label for the location.
    pub location_label: String,
    /// Whether rows are per person rather than per frame.
    pub per_person: bool,
    /// Rows ordered by outbound date.
    pub rows: Vec<ReportRow>,
    /// The totals line.
    pub totals: ReportTotals,
}
