//! Error handling for PlotStudio
//!
//! Provides error types for all layers of the system:
//! - Geometry errors (frame construction and inversion)
//! - Studio errors (registration and verb dispatch)
//! - Calibration errors (wizard state machine)
//! - Device errors (plotter communication)
//! - Store errors (offset persistence)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents errors in coordinate-frame construction and inversion.
#[derive(Error, Debug, Clone)]
pub enum GeometryError {
    /// Frame parameters do not describe a usable drawing surface
    #[error("Invalid frame: {reason}")]
    InvalidFrame {
        /// Why the frame is unusable.
        reason: String,
    },
}

/// Studio error type
///
/// Represents errors in object registration and verb dispatch. These are
/// always detected before anything is forwarded to the plotter, so a failed
/// call leaves the studio unchanged.
#[derive(Error, Debug, Clone)]
pub enum StudioError {
    /// An object with this name is already registered
    #[error("Duplicate object name: {name}")]
    DuplicateName {
        /// The name that collided.
        name: String,
    },

    /// No object is registered under this name
    #[error("Unknown object: {name}")]
    UnknownObject {
        /// The name that failed to resolve.
        name: String,
    },

    /// The resolved object does not offer the requested verb
    #[error("Object '{object}' does not support verb '{verb}'")]
    UnsupportedVerb {
        /// The registered name of the object.
        object: String,
        /// The verb that is not in its capability set.
        verb: String,
    },
}

/// Calibration error type
///
/// Represents violations of the alignment wizard's state machine and of its
/// parameter constraints.
#[derive(Error, Debug, Clone)]
pub enum CalibrationError {
    /// Operation is not valid in the current wizard state
    #[error("Invalid calibration transition from {current} to {requested}")]
    InvalidTransition {
        /// The current state name.
        current: String,
        /// The requested state name.
        requested: String,
    },

    /// Step magnitude is not a usable jog distance
    #[error("Invalid step magnitude: {value}")]
    InvalidDelta {
        /// The rejected magnitude.
        value: f64,
    },
}

/// Device error type
///
/// Represents failures reported by a plotter implementation. The studio and
/// the calibrator propagate these unchanged and never retry.
#[derive(Error, Debug, Clone)]
pub enum DeviceError {
    /// The plotter did not acknowledge a command
    #[error("Plotter not responding: {reason}")]
    NotResponding {
        /// The reason the plotter is unreachable.
        reason: String,
    },

    /// The plotter refused a command
    #[error("Plotter rejected {command}: {reason}")]
    CommandRejected {
        /// The rejected command, rendered for diagnostics.
        command: String,
        /// The reason the command was refused.
        reason: String,
    },
}

/// Offset store error type
///
/// Represents failures reading or writing the persisted alignment offset.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents do not parse as an offset line
    #[error("Malformed offset line '{content}'")]
    Malformed {
        /// The offending line.
        content: String,
    },
}

/// Main error type for PlotStudio
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Studio error
    #[error(transparent)]
    Studio(#[from] StudioError),

    /// Calibration error
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    /// Device error
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Offset store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a frame-construction failure
    pub fn is_invalid_frame(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::InvalidFrame { .. }))
    }

    /// Check if this is a duplicate-registration failure
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Error::Studio(StudioError::DuplicateName { .. }))
    }

    /// Check if this is a name-resolution failure
    pub fn is_unknown_object(&self) -> bool {
        matches!(self, Error::Studio(StudioError::UnknownObject { .. }))
    }

    /// Check if this is a capability failure
    pub fn is_unsupported_verb(&self) -> bool {
        matches!(self, Error::Studio(StudioError::UnsupportedVerb { .. }))
    }

    /// Check if this error came from the plotter
    pub fn is_device_error(&self) -> bool {
        matches!(self, Error::Device(_))
    }

    /// Check if this is a wizard state-machine violation
    pub fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            Error::Calibration(CalibrationError::InvalidTransition { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
