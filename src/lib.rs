//! # PlotStudio
//!
//! A pen-plotter studio library with support for:
//! - Anchor-calibrated drawing surfaces placed anywhere on the bed
//! - Named plot objects driven through a typed verb surface
//! - An interactive alignment wizard for resuming interrupted plots
//! - A narrow device boundary with a trace-recording simulator
//!
//! ## Architecture
//!
//! PlotStudio is organized as a workspace with multiple crates:
//!
//! 1. **plotstudio-core** - Geometry, coordinate frames, plotter operations, errors
//! 2. **plotstudio-device** - The plotter trait, shared handles, simulated device
//! 3. **plotstudio-studio** - Drawable objects, verb dispatch, offset application, history
//! 4. **plotstudio-calibration** - The alignment wizard and offset persistence
//! 5. **plotstudio** - Facade crate that re-exports the public surface
//!
//! ## Coordinate model
//!
//! Every drawing surface carries its own local frame, placed by measuring
//! two opposite corners on the physical bed. Local coordinates are mapped
//! to machine coordinates through the frame, then shifted by the studio's
//! alignment offset, and only then reach the device. The offset is the
//! product of a calibration session and can be persisted across restarts.

// Module re-exports for callers that want the full namespaces
pub use plotstudio_calibration::{offset_store, wizard};
pub use plotstudio_core::{command, frame, geometry};
pub use plotstudio_studio::objects;

pub use plotstudio_core::{
    CalibrationError, CoordinateFrame, DeviceError, Error, GeometryError, PenState, PlotterOp,
    Result, StoreError, StudioError, Vec2, EPSILON,
};

pub use plotstudio_device::{
    shared_plotter, NoOpPlotter, Plotter, SharedPlotter, SimulatedPlotter, TraceSegment,
};

pub use plotstudio_studio::{Bounds, BrushCleaner, Canvas, PTObject, Studio, Verb, VerbKind};

pub use plotstudio_calibration::{
    load_offset, save_offset, AlignmentCalibrator, CalibrationEvent, CalibrationOptions, Commit,
    Direction, MarkStyle, WizardState, DEFAULT_DELTA, MARK_CIRCLE_RADIUS, MARK_CIRCLE_SEGMENTS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
