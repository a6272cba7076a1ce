//! # PlotStudio Calibration
//!
//! The alignment calibration layer for PlotStudio.
//! Provides the interactive wizard that jogs the pen onto a reference
//! mark and derives an alignment offset, session options, and the
//! plain-text offset store that lets a plot resume across restarts.

pub mod config;
pub mod offset_store;
pub mod wizard;

pub use config::CalibrationOptions;
pub use offset_store::{load_offset, save_offset};
pub use wizard::{
    AlignmentCalibrator, CalibrationEvent, Commit, Direction, MarkStyle, WizardState,
    DEFAULT_DELTA, MARK_CIRCLE_RADIUS, MARK_CIRCLE_SEGMENTS,
};
