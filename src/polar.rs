//! Complex numbers from magnitude and angle.

use num_complex::Complex64;

use crate::types::Angle;
use crate::units::Quantity;

/// Anything that can serve as the modulus of a polar phasor.
pub trait Magnitude {
    type Complex;

    fn with_angle(self, phi: Angle) -> Self::Complex;
}

impl Magnitude for f64 {
    type Complex = Complex64;

    fn with_angle(self, phi: Angle) -> Complex64 {
        Complex64::from_polar(self, phi.to_radians())
    }
}

/// The unit of `r` carries over to the result.
impl Magnitude for Quantity<f64> {
    type Complex = Quantity<Complex64>;

    fn with_angle(self, phi: Angle) -> Quantity<Complex64> {
        Quantity::new(self.value.with_angle(phi), self.unit)
    }
}

/// `r·cos(phi) + i·r·sin(phi)`.
///
/// A bare `f64` angle is taken as radians; pass [`Angle::degrees`] for
/// degrees. Negative `r` is accepted and points the other way.
///
/// ```
/// use phasorplot::{polar, types::Angle, units::VOLT};
///
/// let z = polar(2.0, Angle::degrees(90.0));
/// assert!(z.re.abs() < 1e-12 && (z.im - 2.0).abs() < 1e-12);
///
/// let v = polar(230.0 * VOLT, Angle::degrees(-30.0));
/// assert_eq!(v.unit, VOLT);
/// ```
pub fn polar<R: Magnitude>(r: R, phi: impl Into<Angle>) -> R::Complex {
    r.with_angle(phi.into())
}
