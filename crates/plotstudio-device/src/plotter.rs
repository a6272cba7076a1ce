//! The plotter device boundary.
//!
//! Everything above this trait works in operation sequences; everything
//! below it is a concrete machine. Implementations translate the three
//! primitive commands into whatever their hardware speaks and report
//! failures as [`DeviceError`](plotstudio_core::DeviceError) values, which
//! the layers above propagate unchanged and never retry.

use plotstudio_core::{PenState, PlotterOp, Result, Vec2};
use std::cell::RefCell;
use std::rc::Rc;

/// Aligned pen plotter device.
///
/// The alignment offset held here is an advisory mirror: the studio applies
/// its offset to coordinates *before* they reach the device, and keeps the
/// device's copy in sync so direct queries agree. Implementations must
/// store the mirrored value without re-applying it to incoming
/// coordinates.
pub trait Plotter {
    /// Travel to a global machine position.
    fn move_to(&mut self, target: Vec2) -> Result<()>;

    /// Lift the pen off the medium.
    fn pen_up(&mut self) -> Result<()>;

    /// Lower the pen onto the medium.
    fn pen_down(&mut self) -> Result<()>;

    /// Mirror the studio's alignment offset for direct queries.
    fn set_alignment_offset(&mut self, offset: Vec2);

    /// Clear the mirrored alignment offset.
    fn reset_alignment_offset(&mut self);

    /// The mirrored alignment offset.
    fn alignment_offset(&self) -> Vec2;

    /// Last commanded position.
    fn position(&self) -> Vec2;

    /// Current pen state.
    fn pen_state(&self) -> PenState;

    /// Dispatch one operation to the matching primitive.
    fn apply(&mut self, op: PlotterOp) -> Result<()> {
        match op {
            PlotterOp::MoveTo(target) => self.move_to(target),
            PlotterOp::PenUp => self.pen_up(),
            PlotterOp::PenDown => self.pen_down(),
        }
    }

    /// Lower the pen, then travel: draws a segment from the current
    /// position to `target`.
    fn line_to(&mut self, target: Vec2) -> Result<()> {
        self.pen_down()?;
        self.move_to(target)
    }
}

/// A plotter handle shared between the studio and the calibrator.
///
/// The system is single-threaded and synchronous; the `RefCell` enforces at
/// most one in-flight device call.
pub type SharedPlotter = Rc<RefCell<dyn Plotter>>;

/// Wrap a plotter in a [`SharedPlotter`] handle.
pub fn shared_plotter<P: Plotter + 'static>(plotter: P) -> SharedPlotter {
    Rc::new(RefCell::new(plotter))
}

/// A plotter that accepts and discards every command.
///
/// Placeholder for wiring code paths that need a device but no machine.
#[derive(Debug, Default)]
pub struct NoOpPlotter {
    position: Vec2,
    pen: PenState,
    offset: Vec2,
}

impl NoOpPlotter {
    /// Create a no-op plotter at the origin with the pen up
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plotter for NoOpPlotter {
    fn move_to(&mut self, target: Vec2) -> Result<()> {
        self.position = target;
        Ok(())
    }

    fn pen_up(&mut self) -> Result<()> {
        self.pen = PenState::Up;
        Ok(())
    }

    fn pen_down(&mut self) -> Result<()> {
        self.pen = PenState::Down;
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
