//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::EventLocation;

use super::types::{
    EngineConfig, EngineFile, EngineMetadata, LocationsFile, ReportLimits, TripRules,
};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml     # Rule set metadata and trip rule constants
/// └── locations.yaml  # Display labels for the location classes
/// ```
///
/// # Example
///
/// ```no_run
/// use logistics_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Crew per car: {}", loader.rules().vehicles.crew_car_capacity);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if a required file is missing
    /// - `ConfigParseError` if a file contains invalid YAML or misses a field
    /// - `InvalidConfig` if a vehicle capacity or a report limit is zero
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_file = Self::load_yaml::<EngineFile>(&path.join("engine.yaml"))?;
        let locations_file = Self::load_yaml::<LocationsFile>(&path.join("locations.yaml"))?;

        Self::validate_rules(&engine_file.rules)?;
        Self::validate_report_limits(&engine_file.report)?;

        let config = EngineConfig::new(
            engine_file.engine,
            engine_file.rules,
            engine_file.report,
            locations_file.locations,
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_rules(rules: &TripRules) -> EngineResult<()> {
        if rules.vehicles.crew_car_capacity == 0 {
            return Err(EngineError::InvalidConfig {
                field: "rules.vehicles.crew_car_capacity".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if rules.vehicles.labour_van_capacity == 0 {
            return Err(EngineError::InvalidConfig {
                field: "rules.vehicles.labour_van_capacity".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    fn validate_report_limits(limits: &ReportLimits) -> EngineResult<()> {
        if limits.max_rows == 0 {
            return Err(EngineError::InvalidConfig {
                field: "report.max_rows".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the trip rule constants.
    pub fn rules(&self) -> &TripRules {
        self.config.rules()
    }

    /// Returns the report size limits.
    pub fn report_limits(&self) -> &ReportLimits {
        self.config.report_limits()
    }

    /// Returns the display label for a location class.
    pub fn location_label(&self, location: EventLocation) -> &str {
        self.config.location_label(location)
    }
}
