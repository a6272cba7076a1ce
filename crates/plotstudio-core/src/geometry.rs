//! 2D vector math for plotter coordinates.
//!
//! Local canvas coordinates, global machine coordinates, and alignment
//! offsets are all [`Vec2`] values. The type is a plain `Copy` pair with
//! component-wise arithmetic; comparisons use an explicit tolerance because
//! most values have been through trig at least once by the time they reach
//! the device.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Default tolerance for geometric comparisons.
pub const EPSILON: f64 = 1e-9;

/// A point or displacement in 2D plotter space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vec2 {
    /// The zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector from components
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite(),
            "Vec2 components must be finite: x={x}, y={y}"
        );
        Self { x, y }
    }

    /// Euclidean length of the vector
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to another point
    pub fn distance_to(&self, other: Vec2) -> f64 {
        (*self - other).length()
    }

    /// Scale both components by a factor
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Compare against another vector within `epsilon` per component
    pub fn approx_eq(&self, other: &Vec2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Vec2 {
    /// Renders `<x>,<y>`, the shape the offset store persists and parses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Vec2 {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("Invalid vector '{}': expected '<x>,<y>'", s))?;
        let x: f64 = x
            .trim()
            .parse()
            .map_err(|_| format!("Invalid X component in '{}'", s))?;
        let y: f64 = y
            .trim()
            .parse()
            .map_err(|_| format!("Invalid Y component in '{}'", s))?;
        if !x.is_finite() || !y.is_finite() {
            return Err(format!("Non-finite components in '{}'", s));
        }
        Ok(Vec2 { x, y })
    }
}
