//! Vehicle allocation.
//!
//! Shared vehicles are allocated by headcount: a partly filled vehicle
//! still counts as one.

/// Crew members per car unless configured otherwise.
pub const DEFAULT_CREW_CAR_CAPACITY: u64 = 2;

/// Labourers per van unless configured otherwise.
pub const DEFAULT_LABOUR_VAN_CAPACITY: u64 = 5;

/// Long-haul legs per crew frame at a remote event unless configured otherwise.
pub const DEFAULT_OUTSIDE_TRIPS_PER_FRAME: u64 = 2;

/// Returns how many vehicles of `capacity` seats carry `count` people.
///
/// Computes `ceil(count / capacity)`. A zero `capacity` carries nobody
/// and yields `0`; configuration loading rejects it before it gets here.
///
/// # Example
///
/// ```
/// use logistics_engine::calculation::vehicles_needed;
///
/// assert_eq!(vehicles_needed(0, 2), 0);
/// assert_eq!(vehicles_needed(7, 2), 4);
/// assert_eq!(vehicles_needed(12, 5), 3);
/// ```
pub fn vehicles_needed(count: u64, capacity: u64) -> u64 {
    if capacity == 0 {
        return 0;
    }
    count.div_ceil(capacity)
}
