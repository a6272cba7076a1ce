//! Drawable studio objects.
//!
//! Each object owns its placement on the bed and publishes a capability set
//! of verbs. Invoking a verb compiles it into a plotter operation sequence;
//! objects never touch the device themselves, so compilation is pure and
//! the studio stays the only layer with a plotter handle.

use crate::verb::{Verb, VerbKind};
use plotstudio_core::{PlotterOp, Result, Vec2};
use serde::{Deserialize, Serialize};

mod brush_cleaner;
mod canvas;

pub use brush_cleaner::BrushCleaner;
pub use canvas::Canvas;

/// Axis-aligned bounding box in global machine coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower-left corner
    pub min: Vec2,
    /// Upper-right corner
    pub max: Vec2,
}

impl Bounds {
    /// Smallest box enclosing `points`. An empty slice yields a zero box
    /// at the origin.
    pub fn enclosing(points: &[Vec2]) -> Bounds {
        let Some((first, rest)) = points.split_first() else {
            return Bounds {
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            };
        };
        let mut bounds = Bounds {
            min: *first,
            max: *first,
        };
        for p in rest {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        bounds
    }

    /// Check if a global point falls inside the box (edges inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// A named drawable resource managed by the studio.
///
/// Implementations are open: registering a new kind of object is a new
/// impl, not a change to the studio's dispatch.
pub trait PTObject {
    /// The verbs this object answers to.
    fn capabilities(&self) -> &'static [VerbKind];

    /// Compile a verb invocation into the operations that realize it.
    ///
    /// Called with verbs from [`capabilities`](Self::capabilities); other
    /// verbs fail with an unsupported-verb error.
    fn perform(&self, verb: &Verb) -> Result<Vec<PlotterOp>>;

    /// Bounding box of the object on the bed.
    fn bounds(&self) -> Bounds;

    fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    fn supports(&self, kind: VerbKind) -> bool {
        self.capabilities().contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_box() {
        let b = Bounds::enclosing(&[
            Vec2::new(1.0, 5.0),
            Vec2::new(-2.0, 3.0),
            Vec2::new(4.0, -1.0),
        ]);
        assert_eq!(b.min, Vec2::new(-2.0, -1.0));
        assert_eq!(b.max, Vec2::new(4.0, 5.0));
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(4.0, 5.0)));
        assert!(!b.contains(Vec2::new(4.1, 0.0)));
    }

    #[test]
    fn test_enclosing_empty() {
        let b = Bounds::enclosing(&[]);
        assert_eq!(b.min, Vec2::ZERO);
        assert_eq!(b.max, Vec2::ZERO);
    }
}
