//! The alignment calibration wizard.
//!
//! A plot interrupted for an ink change or an overnight pause rarely goes
//! back down in exactly the same place. The wizard re-aligns it: the pen is
//! jogged in shrinking steps until it sits exactly over a reference mark
//! drawn by an earlier pass, and the difference between where the machine
//! thinks it is and where the mark actually is becomes the alignment
//! offset applied to every later travel move.

use crate::config::CalibrationOptions;
use plotstudio_core::{CalibrationError, Error, PenState, Result, Vec2};
use plotstudio_device::SharedPlotter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Jog step a fresh session starts with
pub const DEFAULT_DELTA: f64 = 1.0;

/// Radius of the circle reference mark
pub const MARK_CIRCLE_RADIUS: f64 = 0.05;

/// Chords approximating the circle reference mark
pub const MARK_CIRCLE_SEGMENTS: usize = 12;

/// Lifecycle of a calibration session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardState {
    /// Session created, nothing issued to the plotter yet
    Idle,
    /// Operator is jogging the pen onto the reference mark
    Positioning,
    /// Session finished and produced an outcome
    Committed,
    /// Session ended without producing an outcome
    Aborted,
}

impl WizardState {
    /// Check if a transition from this state to `target` is valid.
    ///
    /// Returns `true` for the three legal transitions:
    /// - Idle → Positioning (session start)
    /// - Positioning → Committed (commit)
    /// - Positioning → Aborted (abort)
    ///
    /// Terminal states have no exits; a finished session is never revived.
    pub fn can_transition_to(&self, target: WizardState) -> bool {
        use WizardState::*;
        matches!(
            (self, target),
            (Idle, Positioning) | (Positioning, Committed) | (Positioning, Aborted)
        )
    }

    /// Check if the session is taking operator input
    pub fn is_positioning(&self) -> bool {
        matches!(self, WizardState::Positioning)
    }

    /// Check if the session has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardState::Committed | WizardState::Aborted)
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Positioning => write!(f, "Positioning"),
            Self::Committed => write!(f, "Committed"),
            Self::Aborted => write!(f, "Aborted"),
        }
    }
}

/// Shape of the reference mark drawn by [`AlignmentCalibrator::mark`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkStyle {
    /// A single pen tap at the current position
    Dot,
    /// A small closed polygon around the current position
    Circle,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self::Dot
    }
}

/// Jog direction on the bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector of the direction
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// One operator input during positioning.
///
/// An interactive front end maps keys to these; tests feed them
/// synthetically. The session itself is started with
/// [`AlignmentCalibrator::start`], not an event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationEvent {
    /// Jog one step in a direction
    Move(Direction),
    /// Double the jog step
    DoubleDelta,
    /// Halve the jog step
    HalveDelta,
    /// Lift the pen
    PenUp,
    /// Lower the pen
    PenDown,
    /// Draw the reference mark at the current position
    Mark,
    /// Finish the session and produce an outcome
    Commit,
    /// End the session without an outcome
    Abort,
}

/// What a committed session produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Commit {
    /// First pass: the position to record as the fiducial for a later
    /// resumed session
    Reference(Vec2),
    /// Resumed pass: the alignment offset, final position minus the
    /// recorded reference
    Offset(Vec2),
}

/// Interactive alignment session over a shared plotter.
///
/// Drives the plotter directly with raw machine coordinates; alignment
/// offsets never apply here, since the whole point is to measure one.
pub struct AlignmentCalibrator {
    plotter: SharedPlotter,
    state: WizardState,
    position: Vec2,
    delta: f64,
    pen: PenState,
    mark_style: MarkStyle,
    reference: Option<Vec2>,
}

impl AlignmentCalibrator {
    /// Create an idle session around a plotter handle
    pub fn new(plotter: SharedPlotter) -> Self {
        Self {
            plotter,
            state: WizardState::Idle,
            position: Vec2::ZERO,
            delta: DEFAULT_DELTA,
            pen: PenState::Up,
            mark_style: MarkStyle::default(),
            reference: None,
        }
    }

    /// Set the reference-mark style
    pub fn with_mark_style(mut self, style: MarkStyle) -> Self {
        self.mark_style = style;
        self
    }

    /// Create an idle session configured from saved options.
    ///
    /// Applies the mark style and the initial jog step, validating the
    /// latter. The start position and resume reference in the options are
    /// for the caller to pass to [`start`](Self::start).
    pub fn from_options(plotter: SharedPlotter, options: &CalibrationOptions) -> Result<Self> {
        let mut calibrator = Self::new(plotter).with_mark_style(options.mark_style);
        calibrator.set_delta_magnitude(options.initial_delta)?;
        Ok(calibrator)
    }

    /// Current session state
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Current candidate position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current jog step
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Current pen flag
    pub fn pen(&self) -> PenState {
        self.pen
    }

    /// Mark style used by [`mark`](Self::mark)
    pub fn mark_style(&self) -> MarkStyle {
        self.mark_style
    }

    /// The fiducial recorded for a resumed session, if any
    pub fn reference(&self) -> Option<Vec2> {
        self.reference
    }

    /// Begin positioning.
    ///
    /// Moves the pen (lifted) to `initial` and records `resume` as the
    /// reference position when this session re-aligns to an earlier pass.
    /// Valid only from `Idle`; on a device failure the session stays idle.
    pub fn start(&mut self, initial: Vec2, resume: Option<Vec2>) -> Result<()> {
        self.guard_transition(WizardState::Positioning)?;
        {
            let mut plotter = self.plotter.borrow_mut();
            plotter.move_to(initial)?;
            plotter.pen_up()?;
        }
        self.position = initial;
        self.pen = PenState::Up;
        self.reference = resume;
        self.state = WizardState::Positioning;
        tracing::debug!(
            "Calibration started at {} (reference: {:?})",
            initial,
            resume
        );
        Ok(())
    }

    /// Jog one step, returning the new candidate position.
    pub fn apply_delta(&mut self, direction: Direction) -> Result<Vec2> {
        self.require_positioning()?;
        let target = self.position + direction.unit() * self.delta;
        self.plotter.borrow_mut().move_to(target)?;
        self.position = target;
        Ok(target)
    }

    /// Change the step used by subsequent jogs.
    ///
    /// Rejects non-finite and non-positive magnitudes. Allowed while idle
    /// so a session can be configured before it starts; rejected once the
    /// session has ended.
    pub fn set_delta_magnitude(&mut self, magnitude: f64) -> Result<()> {
        if self.state.is_terminal() {
            return Err(self.invalid_transition(WizardState::Positioning));
        }
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return Err(CalibrationError::InvalidDelta { value: magnitude }.into());
        }
        self.delta = magnitude;
        Ok(())
    }

    /// Double the jog step, returning the new value.
    pub fn double_delta(&mut self) -> Result<f64> {
        self.set_delta_magnitude(self.delta * 2.0)?;
        Ok(self.delta)
    }

    /// Halve the jog step, returning the new value.
    pub fn halve_delta(&mut self) -> Result<f64> {
        self.set_delta_magnitude(self.delta / 2.0)?;
        Ok(self.delta)
    }

    /// Lift the pen while positioning.
    pub fn pen_up(&mut self) -> Result<()> {
        self.require_positioning()?;
        self.plotter.borrow_mut().pen_up()?;
        self.pen = PenState::Up;
        Ok(())
    }

    /// Lower the pen while positioning.
    pub fn pen_down(&mut self) -> Result<()> {
        self.require_positioning()?;
        self.plotter.borrow_mut().pen_down()?;
        self.pen = PenState::Down;
        Ok(())
    }

    /// Draw the reference mark at the candidate position.
    ///
    /// A dot is a pen tap; a circle is a closed
    /// [`MARK_CIRCLE_SEGMENTS`]-chord polygon of radius
    /// [`MARK_CIRCLE_RADIUS`]. Both end with the pen lifted. The candidate
    /// position is not changed: the circle physically parks the pen on the
    /// perimeter, and the next jog re-synchronizes the machine with an
    /// absolute move.
    pub fn mark(&mut self) -> Result<()> {
        self.require_positioning()?;
        {
            let mut plotter = self.plotter.borrow_mut();
            match self.mark_style {
                MarkStyle::Dot => {
                    plotter.pen_down()?;
                    plotter.pen_up()?;
                }
                MarkStyle::Circle => {
                    let center = self.position;
                    plotter.pen_up()?;
                    plotter.move_to(center + Vec2::new(MARK_CIRCLE_RADIUS, 0.0))?;
                    plotter.pen_down()?;
                    for i in 1..=MARK_CIRCLE_SEGMENTS {
                        let angle =
                            2.0 * std::f64::consts::PI * i as f64 / MARK_CIRCLE_SEGMENTS as f64;
                        let (sin, cos) = angle.sin_cos();
                        plotter.move_to(center + Vec2::new(cos, sin) * MARK_CIRCLE_RADIUS)?;
                    }
                    plotter.pen_up()?;
                }
            }
        }
        self.pen = PenState::Up;
        Ok(())
    }

    /// Finish the session.
    ///
    /// A resumed session yields [`Commit::Offset`], the candidate position
    /// minus the recorded reference; a first pass yields
    /// [`Commit::Reference`] with the candidate position itself, for the
    /// caller to record as the fiducial of a later pass.
    pub fn commit(&mut self) -> Result<Commit> {
        self.guard_transition(WizardState::Committed)?;
        let outcome = match self.reference {
            Some(reference) => Commit::Offset(self.position - reference),
            None => Commit::Reference(self.position),
        };
        self.state = WizardState::Committed;
        tracing::info!("Calibration committed: {:?}", outcome);
        Ok(outcome)
    }

    /// End the session without an outcome.
    ///
    /// Nothing is undone: motion already made stays made, and no offset is
    /// produced or changed anywhere.
    pub fn abort(&mut self) -> Result<()> {
        self.guard_transition(WizardState::Aborted)?;
        self.state = WizardState::Aborted;
        tracing::debug!("Calibration aborted at {}", self.position);
        Ok(())
    }

    /// Feed one operator input.
    ///
    /// Returns the commit outcome when the event was
    /// [`CalibrationEvent::Commit`], `None` otherwise.
    pub fn handle_event(&mut self, event: CalibrationEvent) -> Result<Option<Commit>> {
        match event {
            CalibrationEvent::Move(direction) => {
                self.apply_delta(direction)?;
                Ok(None)
            }
            CalibrationEvent::DoubleDelta => {
                self.double_delta()?;
                Ok(None)
            }
            CalibrationEvent::HalveDelta => {
                self.halve_delta()?;
                Ok(None)
            }
            CalibrationEvent::PenUp => {
                self.pen_up()?;
                Ok(None)
            }
            CalibrationEvent::PenDown => {
                self.pen_down()?;
                Ok(None)
            }
            CalibrationEvent::Mark => {
                self.mark()?;
                Ok(None)
            }
            CalibrationEvent::Commit => self.commit().map(Some),
            CalibrationEvent::Abort => {
                self.abort()?;
                Ok(None)
            }
        }
    }

    fn guard_transition(&self, target: WizardState) -> Result<()> {
        if self.state.can_transition_to(target) {
            Ok(())
        } else {
            Err(self.invalid_transition(target))
        }
    }

    fn require_positioning(&self) -> Result<()> {
        if self.state.is_positioning() {
            Ok(())
        } else {
            Err(self.invalid_transition(WizardState::Positioning))
        }
    }

    fn invalid_transition(&self, requested: WizardState) -> Error {
        CalibrationError::InvalidTransition {
            current: self.state.to_string(),
            requested: requested.to_string(),
        }
        .into()
    }
}
