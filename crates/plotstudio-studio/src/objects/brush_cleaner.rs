//! A fixed brush-cleaning station.

use super::{Bounds, PTObject};
use crate::verb::{Verb, VerbKind};
use plotstudio_core::{PlotterOp, Result, StudioError, Vec2};

/// Points visited during one cleaning swirl.
const SWIRL_POINTS: usize = 10;

/// Fraction of the station radius the swirl runs at, leaving clearance to
/// the basin wall.
const SWIRL_RADIUS_RATIO: f64 = 0.3;

/// A wash basin sitting at a fixed spot on the bed.
///
/// Its single verb dips the brush at the basin center and agitates it along
/// a ten-point swirl spanning two revolutions before lifting out.
#[derive(Debug, Clone)]
pub struct BrushCleaner {
    center: Vec2,
    radius: f64,
}

impl BrushCleaner {
    /// Create a cleaning station from its center and basin radius
    pub fn new(center: Vec2, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "basin radius must be positive, got {radius}"
        );
        Self { center, radius }
    }

    /// Basin center in global machine coordinates
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Basin radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn clean(&self) -> Vec<PlotterOp> {
        let mut ops = Vec::with_capacity(SWIRL_POINTS + 4);
        ops.push(PlotterOp::PenUp);
        ops.push(PlotterOp::MoveTo(self.center));
        ops.push(PlotterOp::PenDown);
        let r = self.radius * SWIRL_RADIUS_RATIO;
        for i in 0..SWIRL_POINTS {
            let angle = 4.0 * std::f64::consts::PI * i as f64 / SWIRL_POINTS as f64;
            let (sin, cos) = angle.sin_cos();
            ops.push(PlotterOp::MoveTo(self.center + Vec2::new(cos, sin) * r));
        }
        ops.push(PlotterOp::PenUp);
        ops
    }
}

impl PTObject for BrushCleaner {
    fn capabilities(&self) -> &'static [VerbKind] {
        &[VerbKind::Clean]
    }

    fn perform(&self, verb: &Verb) -> Result<Vec<PlotterOp>> {
        match verb {
            Verb::Clean => Ok(self.clean()),
            other => Err(StudioError::UnsupportedVerb {
                object: "brush_cleaner".to_string(),
                verb: other.name().to_string(),
            }
            .into()),
        }
    }

    fn bounds(&self) -> Bounds {
        let r = Vec2::new(self.radius, self.radius);
        Bounds {
            min: self.center - r,
            max: self.center + r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotstudio_core::EPSILON;

    #[test]
    fn test_clean_cycle_shape() {
        let cleaner = BrushCleaner::new(Vec2::new(10.0, 10.0), 2.0);
        let ops = cleaner.perform(&Verb::Clean).unwrap();

        assert_eq!(ops.len(), SWIRL_POINTS + 4);
        assert_eq!(ops[0], PlotterOp::PenUp);
        assert_eq!(ops[1], PlotterOp::MoveTo(Vec2::new(10.0, 10.0)));
        assert_eq!(ops[2], PlotterOp::PenDown);
        assert_eq!(*ops.last().unwrap(), PlotterOp::PenUp);

        // Every swirl point keeps the reduced radius from the center.
        for op in &ops[3..ops.len() - 1] {
            let p = op.target().unwrap();
            assert!((p.distance_to(cleaner.center()) - 0.6).abs() < EPSILON);
        }
    }

    #[test]
    fn test_swirl_spans_two_revolutions() {
        let cleaner = BrushCleaner::new(Vec2::ZERO, 1.0);
        let ops = cleaner.perform(&Verb::Clean).unwrap();
        // Five steps per revolution: the second revolution retraces the
        // first, point for point.
        for i in 0..SWIRL_POINTS / 2 {
            let first_rev = ops[3 + i].target().unwrap();
            let second_rev = ops[3 + i + SWIRL_POINTS / 2].target().unwrap();
            assert!(first_rev.approx_eq(&second_rev, EPSILON));
        }
        // The swirl reaches the far side of the basin.
        assert!(ops[5].target().unwrap().x < 0.0);
    }

    #[test]
    fn test_only_clean_supported() {
        let cleaner = BrushCleaner::new(Vec2::ZERO, 1.0);
        assert!(cleaner.supports(VerbKind::Clean));
        assert!(!cleaner.supports(VerbKind::DrawLine));
        let err = cleaner
            .perform(&Verb::DrawLine {
                from: Vec2::ZERO,
                to: Vec2::new(1.0, 0.0),
            })
            .unwrap_err();
        assert!(err.is_unsupported_verb());
    }
}
