//! # PlotStudio Device
//!
//! The plotter device boundary for PlotStudio.
//! Defines the [`Plotter`] trait that concrete machines implement, the
//! shared single-threaded handle used by the studio and the calibrator,
//! and an in-memory simulated plotter that records its motion trace.

pub mod plotter;
pub mod simulated;

pub use plotter::{shared_plotter, NoOpPlotter, Plotter, SharedPlotter};
pub use simulated::{SimulatedPlotter, TraceSegment};
