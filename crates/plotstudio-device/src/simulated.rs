//! In-memory plotter that records its motion trace.

use crate::plotter::Plotter;
use plotstudio_core::{PenState, PlotterOp, Result, Vec2};
use serde::{Deserialize, Serialize};

/// One recorded carriage motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSegment {
    /// Position before the move
    pub from: Vec2,
    /// Position after the move
    pub to: Vec2,
    /// Pen state in effect during the move
    pub pen: PenState,
}

impl TraceSegment {
    /// Check if this motion left a stroke on the medium
    pub fn is_drawn(&self) -> bool {
        self.pen.is_down()
    }
}

/// A plotter that executes nothing and remembers everything.
///
/// Tracks position and pen state like a real machine would, records every
/// motion as a [`TraceSegment`] and every command in an operation log, and
/// never fails. It renders nothing; the recorded trace is the product.
#[derive(Debug, Default)]
pub struct SimulatedPlotter {
    position: Vec2,
    pen: PenState,
    offset: Vec2,
    trace: Vec<TraceSegment>,
    ops: Vec<PlotterOp>,
}

impl SimulatedPlotter {
    /// Create a simulated plotter at the origin with the pen up
    pub fn new() -> Self {
        Self::default()
    }

    /// Every motion recorded so far, in order
    pub fn trace(&self) -> &[TraceSegment] {
        &self.trace
    }

    /// The motions made with the pen down
    pub fn drawn_segments(&self) -> impl Iterator<Item = &TraceSegment> {
        self.trace.iter().filter(|s| s.is_drawn())
    }

    /// Every command received, in order
    pub fn op_log(&self) -> &[PlotterOp] {
        &self.ops
    }

    /// Forget the recorded trace and operation log.
    ///
    /// Position, pen state, and the mirrored offset are kept; only the
    /// recording is discarded.
    pub fn clear_recording(&mut self) {
        self.trace.clear();
        self.ops.clear();
    }
}

impl Plotter for SimulatedPlotter {
    fn move_to(&mut self, target: Vec2) -> Result<()> {
        self.trace.push(TraceSegment {
            from: self.position,
            to: target,
            pen: self.pen,
        });
        self.ops.push(PlotterOp::MoveTo(target));
        self.position = target;
        Ok(())
    }

    fn pen_up(&mut self) -> Result<()> {
        self.pen = PenState::Up;
        self.ops.push(PlotterOp::PenUp);
        Ok(())
    }

    fn pen_down(&mut self) -> Result<()> {
        self.pen = PenState::Down;
        self.ops.push(PlotterOp::PenDown);
        Ok(())
    }

    fn set_alignment_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn reset_alignment_offset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    fn alignment_offset(&self) -> Vec2 {
        self.offset
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn pen_state(&self) -> PenState {
        self.pen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_motion_with_pen_state() {
        let mut sim = SimulatedPlotter::new();
        sim.move_to(Vec2::new(1.0, 0.0)).unwrap();
        sim.pen_down().unwrap();
        sim.move_to(Vec2::new(1.0, 1.0)).unwrap();
        sim.pen_up().unwrap();

        assert_eq!(sim.trace().len(), 2);
        assert_eq!(
            sim.trace()[0],
            TraceSegment {
                from: Vec2::ZERO,
                to: Vec2::new(1.0, 0.0),
                pen: PenState::Up,
            }
        );
        assert_eq!(
            sim.trace()[1],
            TraceSegment {
                from: Vec2::new(1.0, 0.0),
                to: Vec2::new(1.0, 1.0),
                pen: PenState::Down,
            }
        );
        assert_eq!(sim.drawn_segments().count(), 1);
        assert_eq!(sim.position(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_op_log_preserves_order() {
        let mut sim = SimulatedPlotter::new();
        sim.line_to(Vec2::new(2.0, 2.0)).unwrap();
        assert_eq!(
            sim.op_log(),
            &[PlotterOp::PenDown, PlotterOp::MoveTo(Vec2::new(2.0, 2.0))]
        );
    }

    #[test]
    fn test_clear_recording_keeps_machine_state() {
        let mut sim = SimulatedPlotter::new();
        sim.pen_down().unwrap();
        sim.move_to(Vec2::new(3.0, 3.0)).unwrap();
        sim.clear_recording();
        assert!(sim.trace().is_empty());
        assert!(sim.op_log().is_empty());
        assert_eq!(sim.position(), Vec2::new(3.0, 3.0));
        assert!(sim.pen_state().is_down());
    }
}
