//! Inclusive date span counting.
//!
//! Frames carry their dates as `YYYY-MM-DD` strings. A frame that starts
//! and ends on the same day spans one day; a frame whose end precedes its
//! start, or whose dates cannot be read, spans none.

use chrono::NaiveDate;

/// The date format frames are expected to use.
pub const FRAME_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a frame date, ignoring surrounding whitespace.
///
/// Returns `None` for empty or malformed input.
///
/// # Example
///
/// ```
/// use logistics_engine::calculation::parse_frame_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_frame_date("2026-03-02"),
///     NaiveDate::from_ymd_opt(2026, 3, 2)
/// );
/// assert_eq!(parse_frame_date(""), None);
/// assert_eq!(parse_frame_date("02/03/2026"), None);
/// ```
pub fn parse_frame_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, FRAME_DATE_FORMAT).ok()
}

/// Counts the days from `outbound` to `inbound`, both endpoints included.
///
/// # Returns
///
/// - `diff + 1` when `inbound` is on or after `outbound`
/// - `0` when `inbound` is before `outbound`
/// - `0` when either date is missing or malformed
///
/// # Example
///
/// ```
/// use logistics_engine::calculation::days_between;
///
/// assert_eq!(days_between("2026-03-02", "2026-03-02"), 1);
/// assert_eq!(days_between("2026-03-02", "2026-03-04"), 3);
/// assert_eq!(days_between("2026-03-04", "2026-03-02"), 0);
/// assert_eq!(days_between("", "2026-03-02"), 0);
/// ```
pub fn days_between(outbound: &str, inbound: &str) -> u64 {
    match (parse_frame_date(outbound), parse_frame_date(inbound)) {
        (Some(out), Some(inn)) => days_between_dates(out, inn),
        _ => 0,
    }
}

/// Inclusive day count between two parsed dates.
pub fn days_between_dates(outbound: NaiveDate, inbound: NaiveDate) -> u64 {
    let diff = (inbound - outbound).num_days();
    u64::try_from(diff).map_or(0, |days| days + 1)
}
