//! Event location model.
//!
//! The location class is set once per event and changes which hotel and
//! trip rules apply to every frame.

use serde::{Deserialize, Serialize};

/// Where the event takes place relative to the home base.
///
/// # Example
///
/// ```
/// use logistics_engine::models::EventLocation;
///
/// let location: EventLocation = serde_json::from_str("\"Outside Dubai\"").unwrap();
/// assert_eq!(location, EventLocation::Remote);
/// assert!(location.has_hotel_stays());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLocation {
    /// In the home city. Nobody stays in a hotel and crew commute daily.
    #[default]
    #[serde(alias = "Dubai")]
    Local,
    /// Away from the home city. Hotel nights accrue and local transport
    /// runs between the venue and the hotel.
    #[serde(alias = "Outside Dubai")]
    Remote,
}

impl EventLocation {
    /// Returns true if frames at this location can accrue hotel nights.
    pub fn has_hotel_stays(self) -> bool {
        matches!(self, EventLocation::Remote)
    }

    /// The snake_case identifier used in audit payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            EventLocation::Local => "local",
            EventLocation::Remote => "remote",
        }
    }
}

impl std::fmt::Display for EventLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventLocation::Local => write!(f, "Local"),
            EventLocation::Remote => write!(f, "Remote"),
        }
    }
}
