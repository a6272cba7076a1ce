//! Plotter operation model.
//!
//! Drawable objects compile verbs into ordered [`PlotterOp`] sequences; the
//! studio forwards them to the device one at a time. A sequence is the only
//! currency between the object layer and the device layer, so everything
//! the machine can be asked to do is one of three operations.

use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the pen is touching the medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenState {
    /// Pen lifted, travel moves leave no trace
    Up,
    /// Pen lowered, moves draw
    Down,
}

impl PenState {
    /// Check if the pen is on the medium
    pub fn is_down(&self) -> bool {
        matches!(self, PenState::Down)
    }
}

impl Default for PenState {
    fn default() -> Self {
        Self::Up
    }
}

impl fmt::Display for PenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One low-level plotter operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlotterOp {
    /// Travel to a global machine position
    MoveTo(Vec2),
    /// Lift the pen
    PenUp,
    /// Lower the pen
    PenDown,
}

impl PlotterOp {
    /// Check if this operation moves the carriage
    pub fn is_motion(&self) -> bool {
        matches!(self, PlotterOp::MoveTo(_))
    }

    /// Return the operation with `offset` added to its target.
    ///
    /// Pen operations carry no coordinates and pass through unchanged.
    pub fn offset_by(self, offset: Vec2) -> PlotterOp {
        match self {
            PlotterOp::MoveTo(p) => PlotterOp::MoveTo(p + offset),
            other => other,
        }
    }

    /// The target position, if this is a motion operation
    pub fn target(&self) -> Option<Vec2> {
        match self {
            PlotterOp::MoveTo(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for PlotterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "move to {}", p),
            Self::PenUp => write!(f, "pen up"),
            Self::PenDown => write!(f, "pen down"),
        }
    }
}
