//! Tabular logistics reports.
//!
//! Lays an event plan and its calculation out as date-ordered rows with a
//! totals line, either one row per frame or one row per person. Rendering
//! the rows to a document format is left to the caller.

mod builder;
mod types;

pub use builder::{
    DEFAULT_MAX_HOTEL_DATES, DEFAULT_MAX_REPORT_ROWS, build_report, hotel_dates,
};
pub use types::{Report, ReportOptions, ReportRow, ReportTotals};
