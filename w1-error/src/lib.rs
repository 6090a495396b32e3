//! Unified error handling for w1therm
//!
//! This crate provides the single error type shared by the w1therm library and CLI.
//! It uses thiserror for the Display and Error trait impls.

use std::io;
use std::path::PathBuf;

/// Result type alias using W1Error
pub type Result<T> = std::result::Result<T, W1Error>;

/// Unified error type for all w1therm operations
#[derive(thiserror::Error, Debug)]
pub enum W1Error {
    // ============================================================================
    // I/O and File System Errors
    // ============================================================================
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read bus master file {path}: {source}")]
    MasterRead {
        path: PathBuf,
        source: io::Error,
    },

    // ============================================================================
    // Sensor Reading Errors
    // ============================================================================
    #[error("Sensor {id} not found at {path}")]
    SensorNotFound {
        id: String,
        path: PathBuf,
    },

    #[error("CRC check failed for sensor {id}")]
    CrcFailure {
        id: String,
    },

    #[error("Sensor {id} has been disconnected")]
    Disconnected {
        id: String,
    },

    #[error("Malformed reading from sensor {id}: {reason}")]
    MalformedReading {
        id: String,
        reason: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig {
        field: String,
        reason: String,
    },
}

impl W1Error {
    /// Create an invalid config error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed reading error
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedReading {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// True for failures local to one sensor (missing node, CRC, disconnection, bad content).
    ///
    /// These are expected at runtime: sensors get unplugged and miswired, the bus master doesn't.
    pub fn is_sensor_fault(&self) -> bool {
        matches!(
            self,
            Self::SensorNotFound { .. }
                | Self::CrcFailure { .. }
                | Self::Disconnected { .. }
                | Self::MalformedReading { .. }
        )
    }
}
