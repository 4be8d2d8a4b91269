//! Configuration types for the logistics rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_CREW_CAR_CAPACITY, DEFAULT_LABOUR_VAN_CAPACITY, DEFAULT_OUTSIDE_TRIPS_PER_FRAME,
};
use crate::models::EventLocation;
use crate::report::{DEFAULT_MAX_HOTEL_DATES, DEFAULT_MAX_REPORT_ROWS};

/// Identifying information about the rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the rule set.
    pub name: String,
    /// Version or effective date of the rule set.
    pub version: String,
}

/// How many people share one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCapacities {
    /// Crew members per car.
    pub crew_car_capacity: u64,
    /// Labourers per van.
    pub labour_van_capacity: u64,
}

/// The tunable constants of the trip rules.
///
/// The defaults match the shipped `engine.yaml`, so in-process callers
/// can evaluate frames without touching the filesystem.
///
/// # Example
///
/// ```
/// use logistics_engine::config::TripRules;
///
/// let rules = TripRules::default();
/// assert_eq!(rules.vehicles.crew_car_capacity, 2);
/// assert_eq!(rules.vehicles.labour_van_capacity, 5);
/// assert_eq!(rules.outside_trips_per_frame, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRules {
    /// Vehicle capacities.
    pub vehicles: VehicleCapacities,
    /// Long-haul legs per crew frame at a remote location.
    pub outside_trips_per_frame: u64,
}

impl Default for TripRules {
    fn default() -> Self {
        Self {
            vehicles: VehicleCapacities {
                crew_car_capacity: DEFAULT_CREW_CAR_CAPACITY,
                labour_van_capacity: DEFAULT_LABOUR_VAN_CAPACITY,
            },
            outside_trips_per_frame: DEFAULT_OUTSIDE_TRIPS_PER_FRAME,
        }
    }
}

/// Upper bounds on the size of a generated report.
///
/// Per-person reports grow with headcount, so requests are sized before
/// any row is built and rejected when they exceed these limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLimits {
    /// Most rows a report may hold.
    pub max_rows: u64,
    /// Most hotel dates a report may list across all of its rows.
    pub max_hotel_dates: u64,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_REPORT_ROWS,
            max_hotel_dates: DEFAULT_MAX_HOTEL_DATES,
        }
    }
}

/// engine.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineFile {
    /// Rule set metadata.
    pub engine: EngineMetadata,
    /// Trip rule constants.
    pub rules: TripRules,
    /// Report size limits.
    #[serde(default)]
    pub report: ReportLimits,
}

/// Display label for one location class.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationLabel {
    /// The label shown to planners, e.g. the home city's name.
    pub label: String,
}

/// Labels for both location classes.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationLabels {
    /// Label for [`EventLocation::Local`].
    pub local: LocationLabel,
    /// Label for [`EventLocation::Remote`].
    pub remote: LocationLabel,
}

impl Default for LocationLabels {
    fn default() -> Self {
        Self {
            local: LocationLabel {
                label: "Local".to_string(),
            },
            remote: LocationLabel {
                label: "Remote".to_string(),
            },
        }
    }
}

/// locations.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsFile {
    /// Labels by location class.
    pub locations: LocationLabels,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    rules: TripRules,
    report_limits: ReportLimits,
    labels: LocationLabels,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        rules: TripRules,
        report_limits: ReportLimits,
        labels: LocationLabels,
    ) -> Self {
        Self {
            metadata,
            rules,
            report_limits,
            labels,
        }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the trip rule constants.
    pub fn rules(&self) -> &TripRules {
        &self.rules
    }

    /// Returns the report size limits.
    pub fn report_limits(&self) -> &ReportLimits {
        &self.report_limits
    }

    /// Returns the display label for a location class.
    pub fn location_label(&self, location: EventLocation) -> &str {
        match location {
            EventLocation::Local => &self.labels.local.label,
            EventLocation::Remote => &self.labels.remote.label,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            EngineMetadata {
                name: "Event Logistics Engine".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            TripRules::default(),
            ReportLimits::default(),
            LocationLabels::default(),
        )
    }
}
