//! Configuration loading and management for the Event Logistics Engine.
//!
//! This module loads the trip rule constants (vehicle capacities, outside
//! legs per frame) and the location display labels from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use logistics_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded rules: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, EngineMetadata, LocationLabel, LocationLabels, ReportLimits, TripRules,
    VehicleCapacities,
};
