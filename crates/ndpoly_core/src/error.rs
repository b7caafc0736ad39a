//! View error types
//!
//! Geometry generation never fails; these cover requests the view refuses
//! and snapshot persistence.

use std::fmt;
use std::io;

/// Error type for view operations
#[derive(Debug)]
pub enum ViewError {
    /// Requested dimension lies outside the supported range
    DimensionOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
    /// IO error reading or writing a snapshot
    Io(io::Error),
    /// Snapshot text could not be parsed
    Parse(ron::error::SpannedError),
    /// Snapshot could not be serialized
    Serialize(ron::Error),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::DimensionOutOfRange { requested, min, max } => write!(
                f,
                "Dimension {} out of range (supported: {}..={})",
                requested, min, max
            ),
            ViewError::Io(err) => write!(f, "Snapshot IO error: {}", err),
            ViewError::Parse(err) => write!(f, "Snapshot parse error: {}", err),
            ViewError::Serialize(err) => write!(f, "Snapshot serialize error: {}", err),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::DimensionOutOfRange { .. } => None,
            ViewError::Io(err) => Some(err),
            ViewError::Parse(err) => Some(err),
            ViewError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for ViewError {
    fn from(err: io::Error) -> Self {
        ViewError::Io(err)
    }
}

impl From<ron::error::SpannedError> for ViewError {
    fn from(err: ron::error::SpannedError) -> Self {
        ViewError::Parse(err)
    }
}

impl From<ron::Error> for ViewError {
    fn from(err: ron::Error) -> Self {
        ViewError::Serialize(err)
    }
}
