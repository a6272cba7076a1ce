//! Calibration session options.

use crate::wizard::{MarkStyle, DEFAULT_DELTA};
use plotstudio_core::Vec2;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for one calibration session.
///
/// Deserializes from a front end's saved configuration; every field falls
/// back to its default when absent. `start_position` and
/// `resume_reference` are consumed by the caller when invoking
/// [`AlignmentCalibrator::start`](crate::AlignmentCalibrator::start);
/// the remaining fields configure the calibrator itself via
/// [`AlignmentCalibrator::from_options`](crate::AlignmentCalibrator::from_options).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationOptions {
    /// Where the pen travels when the session starts
    pub start_position: Vec2,
    /// Shape of the reference mark
    pub mark_style: MarkStyle,
    /// Jog step the session starts with
    pub initial_delta: f64,
    /// Reference position of an earlier pass, when re-aligning to one
    pub resume_reference: Option<Vec2>,
    /// Where to persist a committed offset, when anywhere
    pub offset_path: Option<PathBuf>,
}

impl Default for CalibrationOptions {
    fn default() -> Self {
        Self {
            start_position: Vec2::ZERO,
            mark_style: MarkStyle::default(),
            initial_delta: DEFAULT_DELTA,
            resume_reference: None,
            offset_path: None,
        }
    }
}
