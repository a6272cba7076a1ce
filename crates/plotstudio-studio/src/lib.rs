//! # PlotStudio Studio
//!
//! The studio layer for PlotStudio.
//! Provides the drawable-object capability model, the typed verb surface,
//! the concrete objects (canvas, brush cleaner), and the [`Studio`]
//! registry that dispatches verbs, applies the alignment offset, and
//! records the emitted operation history.

pub mod objects;
pub mod studio;
pub mod verb;

pub use objects::{Bounds, BrushCleaner, Canvas, PTObject};
pub use studio::Studio;
pub use verb::{Verb, VerbKind};
