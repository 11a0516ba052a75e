//! Per-unit placement of a phasor's shaft, head and label.

use glam::{DVec2, dvec2};
use num_complex::Complex64;

use super::PhasorOptions;
use crate::errors::{Error, Result};
use crate::log::{debug, warn};
use crate::render::defaults::HEAD_ROOT;
use crate::types::{Angle, UnitVec};
use crate::units::Quantity;

/// Everything needed to draw one phasor, in per-unit plot coordinates.
///
/// Computing it is pure; [`draw_phasor`](super::draw_phasor) only forwards
/// these points to a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasorGeometry {
    /// Tail, before the `par` shift.
    pub origin: DVec2,
    /// Head, before the `par` shift.
    pub end: DVec2,
    /// Per-unit length of the phasor.
    pub length: f64,
    /// Direction of the phasor in degrees, counter-clockwise from +x.
    pub angle: f64,
    /// Unit vector 90° clockwise from the direction; zero for a zero phasor.
    pub tangent: DVec2,
    /// Sideways displacement applied to the shaft, the head and the label.
    pub shift: DVec2,
    /// Where the arrowhead segment starts, before the `par` shift.
    pub head_root: DVec2,
    pub label_anchor: DVec2,
    /// Label rotation in degrees.
    pub label_rotation: f64,
}

impl PhasorGeometry {
    pub fn compute(c: &Quantity<Complex64>, options: &PhasorOptions) -> Result<Self> {
        let origin = options.origin.clone().unwrap_or_else(|| c.zero_like());
        let reference = options.reference.clone().unwrap_or_else(|| c.abs());

        let mismatch = || Error::DimensionMismatch {
            phasor: c.unit.to_string(),
            origin: origin.unit.to_string(),
            reference: reference.unit.to_string(),
        };
        if !c.unit.is_compatible(&reference.unit) || !origin.unit.is_compatible(&reference.unit) {
            return Err(mismatch());
        }

        let base = reference.si();
        if !(base > 0.0 && base.is_finite()) {
            return Err(Error::InvalidReference {
                value: reference.value,
            });
        }

        let o = origin.per_unit(&reference).ok_or_else(mismatch)?;
        let e = o + c.per_unit(&reference).ok_or_else(mismatch)?;
        let origin = dvec2(o.re, o.im);
        let end = dvec2(e.re, e.im);
        let delta = end - origin;

        let tangent = match UnitVec::normalized(delta.x, delta.y) {
            Some(dir) => dir.clockwise_normal(),
            None => {
                warn!(phasor = %c, "zero-length phasor has no direction; drawing without offsets");
                UnitVec::ZERO
            }
        };
        let angle = Angle::of(delta).to_degrees();
        let shift = tangent * options.par;
        let head_root = origin + delta * HEAD_ROOT;
        let label_anchor = origin + delta * options.rlabel + tangent * options.tlabel + shift;
        let label_rotation = if options.relrot {
            angle + options.relangle
        } else {
            options.relangle
        };

        let geometry = PhasorGeometry {
            origin,
            end,
            length: delta.x.hypot(delta.y),
            angle,
            tangent: tangent.as_dvec2(),
            shift,
            head_root,
            label_anchor,
            label_rotation,
        };
        debug!(
            angle = geometry.angle,
            length = geometry.length,
            rotation = geometry.label_rotation,
            "phasor geometry"
        );
        Ok(geometry)
    }

    /// Shaft endpoints, shifted.
    pub fn shaft(&self) -> [DVec2; 2] {
        [self.origin + self.shift, self.end + self.shift]
    }

    /// Unshifted displacement from tail to head.
    pub fn delta(&self) -> DVec2 {
        self.end - self.origin
    }

    /// Arrowhead segment `(from, to)`, shifted. The head points at `to`.
    pub fn head(&self) -> (DVec2, DVec2) {
        (self.head_root + self.shift, self.end + self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AMPERE, KILOVOLT, VOLT};
    use std::f64::consts::FRAC_1_SQRT_2;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-12
    }

    #[test]
    fn unit_phasor_along_x() {
        let g = PhasorGeometry::compute(&Complex64::new(1.0, 0.0).into(), &PhasorOptions::default())
            .unwrap();
        assert_eq!(g.origin, DVec2::ZERO);
        assert_eq!(g.end, dvec2(1.0, 0.0));
        assert_eq!(g.angle, 0.0);
        assert_eq!(g.tangent, dvec2(0.0, -1.0));
        assert!(close(g.head_root, dvec2(0.99, 0.0)));
        assert!(close(g.label_anchor, dvec2(0.5, -0.1)));
        assert_eq!(g.label_rotation, 0.0);
    }

    #[test]
    fn diagonal_phasor_is_normalized_by_its_own_magnitude() {
        let g = PhasorGeometry::compute(&Complex64::new(1.0, 1.0).into(), &PhasorOptions::default())
            .unwrap();
        assert!(close(g.end, dvec2(FRAC_1_SQRT_2, FRAC_1_SQRT_2)));
        assert!((g.length - 1.0).abs() < 1e-12);
        assert!((g.angle - 45.0).abs() < 1e-12);
        assert!(close(g.tangent, dvec2(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)));
        assert!(g.tangent.dot(g.delta()).abs() < 1e-12);
    }

    #[test]
    fn explicit_origin_and_reference() {
        let opts = PhasorOptions::default()
            .with_origin(Complex64::new(1.0, 0.0) * VOLT)
            .with_reference(2.0 * VOLT);
        let g = PhasorGeometry::compute(&(Complex64::new(0.0, 2.0) * VOLT), &opts).unwrap();
        assert!(close(g.origin, dvec2(0.5, 0.0)));
        assert!(close(g.end, dvec2(0.5, 1.0)));
        assert!((g.angle - 90.0).abs() < 1e-12);
        assert!(close(g.tangent, dvec2(1.0, 0.0)));
    }

    #[test]
    fn mixed_prefixes_share_a_dimension() {
        let opts = PhasorOptions::default().with_reference(1.0 * KILOVOLT);
        let g = PhasorGeometry::compute(&(Complex64::new(500.0, 0.0) * VOLT), &opts).unwrap();
        assert!(close(g.end, dvec2(0.5, 0.0)));
    }

    #[test]
    fn par_shifts_everything_sideways() {
        let opts = PhasorOptions::default().with_par(0.2);
        let g = PhasorGeometry::compute(&Complex64::new(0.0, 1.0).into(), &opts).unwrap();
        assert!(close(g.shift, dvec2(0.2, 0.0)));
        let [a, b] = g.shaft();
        assert!(close(a, dvec2(0.2, 0.0)));
        assert!(close(b, dvec2(0.2, 1.0)));
        let (from, to) = g.head();
        assert!(close(from, dvec2(0.2, 0.99)));
        assert!(close(to, b));
        assert!(close(g.label_anchor, dvec2(0.3, 0.5)));
    }

    #[test]
    fn relative_rotation_follows_phasor() {
        let c: Quantity<Complex64> = Complex64::new(0.0, 1.0).into();
        let opts = PhasorOptions::default().with_relangle(10.0);
        let g = PhasorGeometry::compute(&c, &opts).unwrap();
        assert_eq!(g.label_rotation, 10.0);

        let g = PhasorGeometry::compute(&c, &opts.with_relrot(true)).unwrap();
        assert!((g.label_rotation - 100.0).abs() < 1e-12);
    }

    #[test]
    fn huge_magnitudes_keep_a_direction() {
        let opts = PhasorOptions::default().with_reference(1.0).with_par(0.5);
        let c: Quantity<Complex64> = Complex64::new(1e200, 1e200).into();
        let g = PhasorGeometry::compute(&c, &opts).unwrap();
        assert!(g.length.is_finite());
        assert!((g.length / 1e200 - 2f64.sqrt()).abs() < 1e-12);
        assert!((g.tangent.length() - 1.0).abs() < 1e-12);
        assert!(close(g.tangent, dvec2(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)));
        assert!(close(g.shift, dvec2(0.5 * FRAC_1_SQRT_2, -0.5 * FRAC_1_SQRT_2)));
    }

    #[test]
    fn mismatch_names_all_three_units() {
        let opts = PhasorOptions::default().with_reference(1.0 * AMPERE);
        let err = PhasorGeometry::compute(&(Complex64::new(1.0, 0.0) * VOLT), &opts).unwrap_err();
        match err {
            Error::DimensionMismatch {
                phasor,
                origin,
                reference,
            } => {
                assert_eq!(phasor, "V");
                assert_eq!(origin, "V");
                assert_eq!(reference, "A");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mismatched_origin_is_rejected() {
        let opts = PhasorOptions::default().with_origin(Complex64::new(1.0, 0.0) * AMPERE);
        let err = PhasorGeometry::compute(&(Complex64::new(1.0, 0.0) * VOLT), &opts).unwrap_err();
        match err {
            Error::DimensionMismatch {
                phasor,
                origin,
                reference,
            } => {
                assert_eq!(phasor, "V");
                assert_eq!(origin, "A");
                assert_eq!(reference, "V");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_phasor_needs_a_reference() {
        let zero: Quantity<Complex64> = Complex64::new(0.0, 0.0).into();
        let err = PhasorGeometry::compute(&zero, &PhasorOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidReference { .. }));

        let negative = PhasorOptions::default().with_reference(-1.0);
        let err = PhasorGeometry::compute(&zero, &negative).unwrap_err();
        assert!(matches!(err, Error::InvalidReference { value } if value == -1.0));

        let opts = PhasorOptions::default().with_reference(1.0);
        let g = PhasorGeometry::compute(&zero, &opts).unwrap();
        assert_eq!(g.tangent, DVec2::ZERO);
        assert_eq!(g.angle, 0.0);
        assert_eq!(g.length, 0.0);
        assert!(close(g.label_anchor, DVec2::ZERO));
    }
}
