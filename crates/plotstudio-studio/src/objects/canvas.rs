//! A calibrated drawing surface.

use super::{Bounds, PTObject};
use crate::verb::{Verb, VerbKind};
use plotstudio_core::{CoordinateFrame, PlotterOp, Result, StudioError, Vec2};

/// A drawing surface taped to the bed, addressed in its own local
/// coordinates.
///
/// The canvas compiles drawing verbs into operation sequences, mapping
/// every local point through its [`CoordinateFrame`]. Stroke discipline is
/// fixed: the pen goes down once after the travel move to the first point
/// and comes up once after the last, so a verb is always a single stroke.
#[derive(Debug, Clone)]
pub struct Canvas {
    frame: CoordinateFrame,
}

impl Canvas {
    /// Create a canvas from a nominal size and two measured anchor corners.
    ///
    /// Fails with an invalid-frame error for non-positive sizes or
    /// coincident anchors.
    pub fn new(size: Vec2, anchor_origin: Vec2, anchor_opposite: Vec2) -> Result<Self> {
        let frame = CoordinateFrame::new(size, anchor_origin, anchor_opposite)?;
        Ok(Self { frame })
    }

    /// Wrap an already-derived frame
    pub fn from_frame(frame: CoordinateFrame) -> Self {
        Self { frame }
    }

    /// The calibrated frame
    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    fn draw_line(&self, from: Vec2, to: Vec2) -> Vec<PlotterOp> {
        vec![
            PlotterOp::MoveTo(self.frame.to_global(from)),
            PlotterOp::PenDown,
            PlotterOp::MoveTo(self.frame.to_global(to)),
            PlotterOp::PenUp,
        ]
    }

    fn draw_path(&self, points: &[Vec2]) -> Vec<PlotterOp> {
        let Some((first, rest)) = points.split_first() else {
            return Vec::new();
        };
        let mut ops = Vec::with_capacity(points.len() + 2);
        ops.push(PlotterOp::MoveTo(self.frame.to_global(*first)));
        ops.push(PlotterOp::PenDown);
        for point in rest {
            ops.push(PlotterOp::MoveTo(self.frame.to_global(*point)));
        }
        ops.push(PlotterOp::PenUp);
        ops
    }
}

impl PTObject for Canvas {
    fn capabilities(&self) -> &'static [VerbKind] {
        &[VerbKind::DrawLine, VerbKind::DrawPath]
    }

    fn perform(&self, verb: &Verb) -> Result<Vec<PlotterOp>> {
        match verb {
            Verb::DrawLine { from, to } => Ok(self.draw_line(*from, *to)),
            Verb::DrawPath { points } => Ok(self.draw_path(points)),
            other => Err(StudioError::UnsupportedVerb {
                object: "canvas".to_string(),
                verb: other.name().to_string(),
            }
            .into()),
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds::enclosing(&self.frame.corners())
    }
}
