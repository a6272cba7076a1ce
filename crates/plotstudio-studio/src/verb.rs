//! Typed verbs for drawable objects.
//!
//! A verb invocation is data: the verb discriminant plus its arguments.
//! Objects publish which discriminants they answer to and the studio
//! matches invocations against that set, so adding a verb means adding a
//! variant here and handling it in the objects that offer it. Nothing is
//! looked up by string.

use plotstudio_core::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verb discriminant, used for capability sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbKind {
    /// Draw a straight segment between two local points
    DrawLine,
    /// Draw a connected polyline through local points
    DrawPath,
    /// Run a brush-cleaning cycle
    Clean,
}

impl VerbKind {
    /// Stable lowercase name, used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::DrawLine => "draw_line",
            Self::DrawPath => "draw_path",
            Self::Clean => "clean",
        }
    }
}

impl fmt::Display for VerbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A verb invocation with its arguments
///
/// Coordinates are local to the target object; the object maps them into
/// global machine coordinates when it compiles the invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Verb {
    /// Straight segment from `from` to `to`
    DrawLine {
        /// Local start point
        from: Vec2,
        /// Local end point
        to: Vec2,
    },
    /// Polyline through `points`, drawn in one pen-down stretch
    DrawPath {
        /// Local waypoints, in drawing order
        points: Vec<Vec2>,
    },
    /// Brush-cleaning cycle at the object's station
    Clean,
}

impl Verb {
    /// The discriminant of this invocation
    pub fn kind(&self) -> VerbKind {
        match self {
            Verb::DrawLine { .. } => VerbKind::DrawLine,
            Verb::DrawPath { .. } => VerbKind::DrawPath,
            Verb::Clean => VerbKind::Clean,
        }
    }

    /// Stable name of the verb, for logs and error messages
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}
