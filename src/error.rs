//! Error types for the Event Logistics Engine.
//!
//! The rule evaluators themselves never fail: degenerate frames are
//! absorbed into zero results. The errors here come from the surfaces
//! around them: configuration loading, frame editing and report sizing.

use thiserror::Error;

use crate::models::FrameKind;

/// The main error type for the Event Logistics Engine.
///
/// # Example
///
/// ```
/// use logistics_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the rules cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// No frame with the given id exists in the plan.
    #[error("No {kind} frame with id '{id}'")]
    FrameNotFound {
        /// Which frame collection was searched.
        kind: FrameKind,
        /// The id that was looked up.
        id: String,
    },

    /// Removing the frame would leave its collection empty.
    #[error("Cannot remove the last {kind} frame")]
    LastFrame {
        /// Which frame collection would have been emptied.
        kind: FrameKind,
    },

    /// The requested report would exceed a configured size limit.
    #[error("Report would hold {size} {measure}, above the limit of {limit}")]
    ReportTooLarge {
        /// What was counted, e.g. "rows".
        measure: String,
        /// The size the report would have had.
        size: u64,
        /// The configured limit.
        limit: u64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
