//! Configuration errors
//!
//! The simulation itself has no error path; everything that can be wrong is
//! rejected when settings, sessions, formations or sprites are constructed.

use std::fmt;

/// Invalid configuration detected at construction time
#[derive(Debug)]
pub enum ConfigError {
    /// A dimension, rate or count that must be strictly positive
    NonPositive { field: &'static str, value: f64 },
    /// A range whose bounds are inverted or a value outside its range
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    /// A formation layout with no members
    EmptyFormation { columns: u32, rows: u32 },
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigError::InvalidRange { field, min, max } => {
                write!(f, "{} has an invalid range [{}, {}]", field, min, max)
            }
            ConfigError::EmptyFormation { columns, rows } => {
                write!(f, "formation {}x{} has no invaders", columns, rows)
            }
            ConfigError::Io(e) => write!(f, "failed to read settings: {}", e),
            ConfigError::Json(e) => write!(f, "failed to parse settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Reject zero, negative and NaN values
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
