//! # PlotStudio Core
//!
//! Core types and utilities for PlotStudio.
//! Provides the fundamental abstractions for plotter coordinates,
//! anchor-calibrated frames, the operation model, and error handling.

pub mod command;
pub mod error;
pub mod frame;
pub mod geometry;

pub use command::{PenState, PlotterOp};
pub use error::{
    CalibrationError, DeviceError, Error, GeometryError, Result, StoreError, StudioError,
};
pub use frame::CoordinateFrame;
pub use geometry::{Vec2, EPSILON};
