//! Crew and labour frame models.
//!
//! A frame is one group's attendance window: a date range, a headcount,
//! the names of the people in it, and the flags the trip rules branch on.
//! Dates are carried as the ISO strings the editing layer produces; they
//! are parsed only when a rule needs them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two personnel categories a frame can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// Production crew.
    Crew,
    /// Loading and rigging labour.
    Labour,
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameKind::Crew => write!(f, "crew"),
            FrameKind::Labour => write!(f, "labour"),
        }
    }
}

/// How a labour frame gets to and from the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabourMode {
    /// Vans carry the labour in and out every day.
    #[default]
    #[serde(alias = "Labour Transport (2-way)")]
    RoundTrip,
    /// Labour arrives with the truck and leaves by van once.
    #[serde(alias = "Truck In, Labour Transport Out")]
    OneWayOut,
    /// Labour arrives and leaves with the truck; no van legs.
    #[serde(alias = "Truck (No Trip)")]
    NoTrip,
}

impl LabourMode {
    /// The snake_case identifier used in audit payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            LabourMode::RoundTrip => "round_trip",
            LabourMode::OneWayOut => "one_way_out",
            LabourMode::NoTrip => "no_trip",
        }
    }

    /// The label shown to planners in reports.
    pub fn label(self) -> &'static str {
        match self {
            LabourMode::RoundTrip => "Labour Transport (2-way)",
            LabourMode::OneWayOut => "Truck In, Labour Transport Out",
            LabourMode::NoTrip => "Truck (No Trip)",
        }
    }
}

impl std::fmt::Display for LabourMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A crew attendance window.
///
/// # Example
///
/// ```
/// use logistics_engine::models::CrewFrame;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let mut frame = CrewFrame::with_defaults("c1", 1, today);
/// frame.count = 3;
/// frame.crew_names = vec!["Ana".to_string()];
///
/// assert_eq!(frame.name, "Crew Frame 1");
/// assert_eq!(frame.outbound, "2026-03-02");
/// assert_eq!(frame.normalized_names(), vec!["Ana", "", ""]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewFrame {
    /// Opaque identifier assigned by the editing layer.
    pub id: String,
    /// Display name of the frame.
    pub name: String,
    /// First day of the window, `YYYY-MM-DD`.
    pub outbound: String,
    /// Last day of the window, `YYYY-MM-DD`.
    pub inbound: String,
    /// Number of crew in the frame. Zero or negative means nobody.
    pub count: i64,
    /// Names of the crew members, in display order.
    #[serde(default)]
    pub crew_names: Vec<String>,
    /// The outbound day is spent travelling and the venue is not visited.
    #[serde(default)]
    pub outbound_travel_day: bool,
    /// The inbound day is spent travelling and the venue is not visited.
    #[serde(default)]
    pub inbound_travel_day: bool,
}

impl CrewFrame {
    /// Creates an empty frame dated `today`, named after its position.
    pub fn with_defaults(id: impl Into<String>, position: usize, today: NaiveDate) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            id: id.into(),
            name: format!("Crew Frame {}", position),
            outbound: date.clone(),
            inbound: date,
            count: 0,
            crew_names: vec![],
            outbound_travel_day: false,
            inbound_travel_day: false,
        }
    }

    /// The headcount with negative input clamped to zero.
    pub fn headcount(&self) -> u64 {
        headcount(self.count)
    }

    /// The name list padded with blanks or truncated to the headcount.
    pub fn normalized_names(&self) -> Vec<String> {
        normalize_names(&self.crew_names, self.headcount())
    }

    /// The non-blank names within the headcount, joined with ", ".
    pub fn joined_names(&self) -> String {
        join_names(&self.crew_names, self.headcount())
    }
}

/// A labour attendance window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabourFrame {
    /// Opaque identifier assigned by the editing layer.
    pub id: String,
    /// Display name of the frame.
    pub name: String,
    /// First day of the window, `YYYY-MM-DD`.
    pub outbound: String,
    /// Last day of the window, `YYYY-MM-DD`.
    pub inbound: String,
    /// Number of labourers in the frame. Zero or negative means nobody.
    pub count: i64,
    /// Names of the labourers, in display order.
    #[serde(default)]
    pub labour_names: Vec<String>,
    /// How the labourers travel to and from the venue.
    #[serde(default)]
    pub mode: LabourMode,
    /// Whether the labourers are put up in a hotel. Ignored for local events.
    #[serde(default)]
    pub hotel_required: bool,
}

impl LabourFrame {
    /// Creates an empty round-trip frame dated `today`, named after its position.
    pub fn with_defaults(id: impl Into<String>, position: usize, today: NaiveDate) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            id: id.into(),
            name: format!("Labour Frame {}", position),
            outbound: date.clone(),
            inbound: date,
            count: 0,
            labour_names: vec![],
            mode: LabourMode::RoundTrip,
            hotel_required: false,
        }
    }

    /// The headcount with negative input clamped to zero.
    pub fn headcount(&self) -> u64 {
        headcount(self.count)
    }

    /// The name list padded with blanks or truncated to the headcount.
    pub fn normalized_names(&self) -> Vec<String> {
        normalize_names(&self.labour_names, self.headcount())
    }

    /// The non-blank names within the headcount, joined with ", ".
    pub fn joined_names(&self) -> String {
        join_names(&self.labour_names, self.headcount())
    }
}

fn headcount(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

fn normalize_names(names: &[String], headcount: u64) -> Vec<String> {
    let len = usize::try_from(headcount).unwrap_or(usize::MAX);
    let mut normalized: Vec<String> = names.iter().take(len).cloned().collect();
    normalized.resize(len, String::new());
    normalized
}

// Padding is blank, so only the given names need to be visited.
fn join_names(names: &[String], headcount: u64) -> String {
    let len = usize::try_from(headcount).unwrap_or(usize::MAX);
    names
        .iter()
        .take(len)
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
