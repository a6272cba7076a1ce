//! End-to-end studio sessions against recording and faulty device doubles.

use plotstudio_core::{DeviceError, PenState, PlotterOp, Result, Vec2, EPSILON};
use plotstudio_device::{Plotter, SharedPlotter, SimulatedPlotter};
use plotstudio_studio::{BrushCleaner, Canvas, Studio, Verb};
use std::cell::RefCell;
use std::rc::Rc;

/// Delegates everything to a recorder but refuses to lower the pen.
struct StuckPenPlotter {
    inner: SimulatedPlotter,
}

impl StuckPenPlotter {
    fn new() -> Self {
        Self {
            inner: SimulatedPlotter::new(),
        }
    }
}

impl Plotter for StuckPenPlotter {
    fn move_to(&mut self, target: Vec2) -> Result<()> {
        self.inner.move_to(target)
    }

    fn pen_up(&mut self) -> Result<()> {
        self.inner.pen_up()
    }

    fn pen_down(&mut self) -> Result<()> {
        Err(DeviceError::CommandRejected {
            command: "pen down".to_string(),
            reason: "servo stalled".to_string(),
        }
        .into())
    }

    fn set_alignment_offset(&mut self, offset: Vec2) {
        self.inner.set_alignment_offset(offset);
    }

    fn reset_alignment_offset(&mut self) {
        self.inner.reset_alignment_offset();
    }

    fn alignment_offset(&self) -> Vec2 {
        self.inner.alignment_offset()
    }

    fn position(&self) -> Vec2 {
        self.inner.position()
    }

    fn pen_state(&self) -> PenState {
        self.inner.pen_state()
    }
}

fn sim_studio() -> (Studio, Rc<RefCell<SimulatedPlotter>>) {
    let sim = Rc::new(RefCell::new(SimulatedPlotter::new()));
    let handle: SharedPlotter = sim.clone();
    (Studio::new(handle), sim)
}

fn tilted_canvas() -> Box<Canvas> {
    Box::new(
        Canvas::new(
            Vec2::new(6.0, 4.0),
            Vec2::new(4.0, 1.0),
            Vec2::new(8.0, 7.0),
        )
        .unwrap(),
    )
}

#[test]
fn test_tilted_canvas_line_lands_on_pinned_globals() {
    let (mut studio, sim) = sim_studio();
    studio.add_object("canvas", tilted_canvas()).unwrap();
    studio
        .dispatch(
            "canvas",
            &Verb::DrawLine {
                from: Vec2::new(1.0, 1.0),
                to: Vec2::new(2.0, 1.0),
            },
        )
        .unwrap();

    let history = studio.history();
    assert_eq!(history.len(), 4);
    assert!(history[0]
        .target()
        .unwrap()
        .approx_eq(&Vec2::new(59.0 / 13.0, 30.0 / 13.0), EPSILON));
    assert_eq!(history[1], PlotterOp::PenDown);
    assert!(history[2]
        .target()
        .unwrap()
        .approx_eq(&Vec2::new(71.0 / 13.0, 35.0 / 13.0), EPSILON));
    assert_eq!(history[3], PlotterOp::PenUp);

    // The one drawn segment connects the two pinned points.
    let sim = sim.borrow();
    let drawn: Vec<_> = sim.drawn_segments().collect();
    assert_eq!(drawn.len(), 1);
    assert!(drawn[0]
        .from
        .approx_eq(&Vec2::new(59.0 / 13.0, 30.0 / 13.0), EPSILON));
}

#[test]
fn test_offset_shifts_every_travel_target_exactly() {
    let offset = Vec2::new(0.05, 0.02);
    let session = [
        Verb::DrawLine {
            from: Vec2::new(0.5, 0.5),
            to: Vec2::new(3.0, 1.0),
        },
        Verb::DrawPath {
            points: vec![
                Vec2::new(1.0, 1.0),
                Vec2::new(2.0, 1.0),
                Vec2::new(2.0, 2.0),
            ],
        },
    ];

    let (mut baseline, _) = sim_studio();
    baseline.add_object("canvas", tilted_canvas()).unwrap();
    for verb in &session {
        baseline.dispatch("canvas", verb).unwrap();
    }

    let (mut shifted, _) = sim_studio();
    shifted.add_object("canvas", tilted_canvas()).unwrap();
    shifted.set_alignment_offset(offset);
    for verb in &session {
        shifted.dispatch("canvas", verb).unwrap();
    }

    assert_eq!(baseline.history().len(), shifted.history().len());
    for (base, moved) in baseline.history().iter().zip(shifted.history()) {
        match (base, moved) {
            (PlotterOp::MoveTo(b), PlotterOp::MoveTo(m)) => {
                assert!((*b + offset).approx_eq(m, EPSILON));
            }
            _ => assert_eq!(base, moved),
        }
    }

    // Resetting restores the baseline emission.
    shifted.reset_alignment_offset();
    shifted.clear_history();
    for verb in &session {
        shifted.dispatch("canvas", verb).unwrap();
    }
    assert_eq!(shifted.history(), baseline.history());
}

#[test]
fn test_device_failure_propagates_unchanged() {
    let stuck = Rc::new(RefCell::new(StuckPenPlotter::new()));
    let handle: SharedPlotter = stuck.clone();
    let mut studio = Studio::new(handle);
    studio.add_object("canvas", tilted_canvas()).unwrap();
    studio.set_alignment_offset(Vec2::new(0.1, 0.1));

    let err = studio
        .dispatch(
            "canvas",
            &Verb::DrawLine {
                from: Vec2::new(1.0, 1.0),
                to: Vec2::new(2.0, 1.0),
            },
        )
        .unwrap_err();
    assert!(err.is_device_error());
    assert_eq!(err.to_string(), "Plotter rejected pen down: servo stalled");

    // The travel move before the fault was executed and stays recorded.
    assert_eq!(studio.history().len(), 1);
    assert!(studio.history()[0].is_motion());
    assert_eq!(stuck.borrow().position(), studio.history()[0].target().unwrap());
}

#[test]
fn test_mixed_session_draws_and_cleans() {
    let (mut studio, sim) = sim_studio();
    studio
        .add_object(
            "canvas",
            Box::new(
                Canvas::new(
                    Vec2::new(10.0, 10.0),
                    Vec2::new(0.0, 0.0),
                    Vec2::new(10.0, 10.0),
                )
                .unwrap(),
            ),
        )
        .unwrap();
    studio
        .add_object("cleaner", Box::new(BrushCleaner::new(Vec2::new(20.0, 0.0), 2.0)))
        .unwrap();

    studio
        .dispatch(
            "canvas",
            &Verb::DrawLine {
                from: Vec2::new(0.0, 0.0),
                to: Vec2::new(5.0, 5.0),
            },
        )
        .unwrap();
    studio.dispatch("cleaner", &Verb::Clean).unwrap();

    let sim = sim.borrow();
    // One drawn segment from the line, ten from the swirl.
    assert_eq!(sim.drawn_segments().count(), 11);
    // The session ends with the pen lifted.
    assert_eq!(sim.pen_state(), PenState::Up);
}
