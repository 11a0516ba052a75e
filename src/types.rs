//! Small numeric and geometric newtypes shared by the phasor and render code.
//!
//! Plotting coordinates are per-unit `DVec2`s (Y-up); these types carry the
//! pieces that need more meaning than a raw `f64`.

use std::f64::consts::PI;
use std::fmt;
use std::ops::Mul;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// A plane angle, stored in radians.
///
/// A bare `f64` converts as radians; use [`Angle::degrees`] for degree values.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn radians(val: f64) -> Angle {
        Angle(val)
    }

    #[inline]
    pub fn degrees(val: f64) -> Angle {
        Angle(val * PI / 180.0)
    }

    /// Direction of a 2D vector, measured counter-clockwise from +x.
    #[inline]
    pub fn of(v: DVec2) -> Angle {
        Angle(v.y.atan2(v.x))
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0 * 180.0 / PI
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Angle(radians)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_degrees())
    }
}

/// A unit direction vector (dimensionless, normalized)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct UnitVec {
    dx: f64,
    dy: f64,
}

impl UnitVec {
    pub const ZERO: UnitVec = UnitVec { dx: 0.0, dy: 0.0 };
    pub const EAST: UnitVec = UnitVec { dx: 1.0, dy: 0.0 };
    pub const NORTH: UnitVec = UnitVec { dx: 0.0, dy: 1.0 };

    /// Create a normalized unit vector from components.
    /// Returns None if the input has zero length.
    pub fn normalized(dx: f64, dy: f64) -> Option<Self> {
        let len = dx.hypot(dy);
        if len == 0.0 || !len.is_finite() {
            None
        } else {
            Some(UnitVec { dx: dx / len, dy: dy / len })
        }
    }

    /// Direction rotated -90° (clockwise in a Y-up frame).
    ///
    /// This is the tangential direction used to push labels and parallel
    /// phasors sideways.
    pub fn clockwise_normal(self) -> UnitVec {
        UnitVec { dx: self.dy, dy: -self.dx }
    }

    pub fn dx(self) -> f64 {
        self.dx
    }

    pub fn dy(self) -> f64 {
        self.dy
    }

    pub fn as_dvec2(self) -> DVec2 {
        dvec2(self.dx, self.dy)
    }
}

/// Scaling a unit vector gives a plain displacement
impl Mul<f64> for UnitVec {
    type Output = DVec2;
    fn mul(self, len: f64) -> DVec2 {
        dvec2(self.dx * len, self.dy * len)
    }
}

/// Axis-aligned bounding box in per-unit coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point. A NaN point poisons the box so that
    /// `is_finite` reports it.
    pub fn expand_point(&mut self, p: DVec2) {
        if p.is_nan() || self.min.is_nan() {
            self.min = DVec2::NAN;
            self.max = DVec2::NAN;
            return;
        }
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Convert per-unit plot coordinates to SVG points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    pub points_per_unit: f64,
}

impl Scaler {
    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(points_per_unit: f64) -> Result<Self, NumericError> {
        if points_per_unit.is_nan() {
            Err(NumericError::NaN)
        } else if points_per_unit.is_infinite() {
            Err(NumericError::Infinite)
        } else if points_per_unit == 0.0 {
            Err(NumericError::Zero)
        } else if points_per_unit < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { points_per_unit })
        }
    }

    /// Convert a per-unit length to points.
    #[inline]
    pub fn pt(&self, len: f64) -> f64 {
        len * self.points_per_unit
    }
}
