//! Anchor-calibrated coordinate frames.
//!
//! A physical drawing surface is taped down somewhere on the plotter bed,
//! usually not square to the axes. Rather than measuring an angle, the
//! operator measures two opposite corners in machine coordinates and states
//! the surface's nominal size; the frame derives the local-to-global mapping
//! from those three facts.

use crate::error::GeometryError;
use crate::geometry::{Vec2, EPSILON};

/// Affine map between a drawing surface's local coordinates and the
/// plotter's global coordinates.
///
/// The mapping is a similarity transform: a rotation plus a uniform scale,
/// never a skew. The rotation is the angle between the measured corner
/// delta and the nominal diagonal; the scale is the ratio of their lengths.
/// Both anchors are mapped exactly: local `(0,0)` lands on the origin
/// anchor and local `(width,height)` lands on the opposite anchor. Anchor
/// pairs whose distance disagrees with the nominal diagonal therefore
/// rescale the whole surface uniformly instead of shearing it.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateFrame {
    size: Vec2,
    anchor_origin: Vec2,
    anchor_opposite: Vec2,
    basis_x: Vec2,
    basis_y: Vec2,
}

impl CoordinateFrame {
    /// Derive a frame from a nominal size and two measured anchor corners.
    ///
    /// `size` is the surface's local width and height; `anchor_origin` is
    /// the machine position of local `(0,0)` and `anchor_opposite` the
    /// machine position of local `(width,height)`.
    ///
    /// Fails with [`GeometryError::InvalidFrame`] if either size component
    /// is not strictly positive or the anchors coincide. Nothing is
    /// constructed on failure.
    pub fn new(
        size: Vec2,
        anchor_origin: Vec2,
        anchor_opposite: Vec2,
    ) -> Result<Self, GeometryError> {
        if !(size.x > 0.0) {
            return Err(GeometryError::InvalidFrame {
                reason: format!("width must be positive, got {}", size.x),
            });
        }
        if !(size.y > 0.0) {
            return Err(GeometryError::InvalidFrame {
                reason: format!("height must be positive, got {}", size.y),
            });
        }
        if anchor_origin.approx_eq(&anchor_opposite, EPSILON) {
            return Err(GeometryError::InvalidFrame {
                reason: format!("anchor corners coincide at {}", anchor_origin),
            });
        }

        let delta = anchor_opposite - anchor_origin;
        let rotation = delta.y.atan2(delta.x) - size.y.atan2(size.x);
        let scale = delta.length() / size.length();
        let (sin, cos) = rotation.sin_cos();
        tracing::debug!(
            "Derived frame at {}: rotation {:.4} rad, scale {:.4}",
            anchor_origin,
            rotation,
            scale
        );

        Ok(Self {
            size,
            anchor_origin,
            anchor_opposite,
            basis_x: Vec2::new(cos, sin) * scale,
            basis_y: Vec2::new(-sin, cos) * scale,
        })
    }

    /// Nominal local size of the surface
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Machine position of local `(0,0)`
    pub fn anchor_origin(&self) -> Vec2 {
        self.anchor_origin
    }

    /// Machine position of local `(width,height)`
    pub fn anchor_opposite(&self) -> Vec2 {
        self.anchor_opposite
    }

    /// Rotation of the surface relative to the machine axes, in radians
    pub fn rotation(&self) -> f64 {
        self.basis_x.y.atan2(self.basis_x.x)
    }

    /// Uniform scale applied on top of the nominal size
    pub fn scale(&self) -> f64 {
        self.basis_x.length()
    }

    /// Map a local point into global machine coordinates.
    pub fn to_global(&self, local: Vec2) -> Vec2 {
        self.anchor_origin + self.basis_x * local.x + self.basis_y * local.y
    }

    /// Map a global machine point back into local coordinates.
    ///
    /// Inverse of [`to_global`](Self::to_global). Fails with
    /// [`GeometryError::InvalidFrame`] only on a degenerate basis, which
    /// cannot occur for frames built by [`new`](Self::new).
    pub fn to_local(&self, global: Vec2) -> Result<Vec2, GeometryError> {
        let det = self.basis_x.x * self.basis_y.y - self.basis_y.x * self.basis_x.y;
        if det.abs() < f64::EPSILON {
            return Err(GeometryError::InvalidFrame {
                reason: "degenerate basis, frame cannot be inverted".to_string(),
            });
        }
        let d = global - self.anchor_origin;
        Ok(Vec2::new(
            (d.x * self.basis_y.y - d.y * self.basis_y.x) / det,
            (d.y * self.basis_x.x - d.x * self.basis_x.y) / det,
        ))
    }

    /// Global positions of the four surface corners, counter-clockwise from
    /// the origin anchor.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.anchor_origin,
            self.to_global(Vec2::new(self.size.x, 0.0)),
            self.anchor_opposite,
            self.to_global(Vec2::new(0.0, self.size.y)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(size: (f64, f64), a: (f64, f64), b: (f64, f64)) -> CoordinateFrame {
        CoordinateFrame::new(
            Vec2::new(size.0, size.1),
            Vec2::new(a.0, a.1),
            Vec2::new(b.0, b.1),
        )
        .unwrap()
    }

    #[test]
    fn test_identity_frame_maps_points_unchanged() {
        let f = frame((10.0, 10.0), (0.0, 0.0), (10.0, 10.0));
        assert!(f
            .to_global(Vec2::new(1.0, 0.0))
            .approx_eq(&Vec2::new(1.0, 0.0), EPSILON));
        assert!(f
            .to_global(Vec2::new(3.5, 7.25))
            .approx_eq(&Vec2::new(3.5, 7.25), EPSILON));
        assert!((f.rotation()).abs() < EPSILON);
        assert!((f.scale() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_anchors_mapped_exactly() {
        let f = frame((6.0, 4.0), (4.0, 1.0), (8.0, 7.0));
        assert!(f
            .to_global(Vec2::ZERO)
            .approx_eq(&Vec2::new(4.0, 1.0), EPSILON));
        assert!(f
            .to_global(Vec2::new(6.0, 4.0))
            .approx_eq(&Vec2::new(8.0, 7.0), EPSILON));
    }

    #[test]
    fn test_tilted_frame_pinned_values() {
        // size (6,4) with corner delta (4,6): rotation has cos 12/13 and
        // sin 5/13, scale exactly 1.
        let f = frame((6.0, 4.0), (4.0, 1.0), (8.0, 7.0));
        let p1 = f.to_global(Vec2::new(1.0, 1.0));
        let p2 = f.to_global(Vec2::new(2.0, 1.0));
        assert!(p1.approx_eq(&Vec2::new(59.0 / 13.0, 30.0 / 13.0), EPSILON));
        assert!(p2.approx_eq(&Vec2::new(71.0 / 13.0, 35.0 / 13.0), EPSILON));
        assert!((f.scale() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_anchor_distance_rescales_uniformly() {
        // Nominal diagonal sqrt(5), measured diagonal 2*sqrt(5): everything
        // doubles, nothing rotates.
        let f = frame((2.0, 1.0), (1.0, 1.0), (5.0, 3.0));
        assert!((f.scale() - 2.0).abs() < EPSILON);
        assert!(f.rotation().abs() < EPSILON);
        assert!(f
            .to_global(Vec2::new(1.0, 0.0))
            .approx_eq(&Vec2::new(3.0, 1.0), EPSILON));
        assert!(f
            .to_global(Vec2::new(2.0, 1.0))
            .approx_eq(&Vec2::new(5.0, 3.0), EPSILON));
    }

    #[test]
    fn test_roundtrip_within_epsilon() {
        let f = frame((6.0, 4.0), (4.0, 1.0), (8.0, 7.0));
        for p in [
            Vec2::ZERO,
            Vec2::new(1.0, 1.0),
            Vec2::new(6.0, 4.0),
            Vec2::new(-2.0, 9.5),
        ] {
            let back = f.to_local(f.to_global(p)).unwrap();
            assert!(back.approx_eq(&p, 1e-9), "roundtrip drifted for {}", p);
        }
    }

    #[test]
    fn test_degenerate_frames_rejected() {
        let err = CoordinateFrame::new(
            Vec2::new(0.0, 4.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidFrame { .. }));

        assert!(CoordinateFrame::new(
            Vec2::new(6.0, -1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
        )
        .is_err());

        assert!(CoordinateFrame::new(
            Vec2::new(6.0, 4.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 2.0),
        )
        .is_err());
    }

    #[test]
    fn test_corners_walk_the_surface() {
        let f = frame((2.0, 1.0), (0.0, 0.0), (2.0, 1.0));
        let c = f.corners();
        assert!(c[0].approx_eq(&Vec2::new(0.0, 0.0), EPSILON));
        assert!(c[1].approx_eq(&Vec2::new(2.0, 0.0), EPSILON));
        assert!(c[2].approx_eq(&Vec2::new(2.0, 1.0), EPSILON));
        assert!(c[3].approx_eq(&Vec2::new(0.0, 1.0), EPSILON));
    }
}
