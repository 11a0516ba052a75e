//! Runtime physical units for phasor values.
//!
//! Every [`Unit`] knows its dimension and its scale to the coherent SI unit
//! of that dimension:
//!
//! ```text
//! v_si = v * unit.scale
//! ```
//!
//! Two quantities can be combined additively or divided into a per-unit
//! number only when their dimensions agree. That check happens at runtime:
//! the conversions return `None` on a mismatch rather than silently dropping
//! the unit, and [`draw_phasor`](crate::draw_phasor) reports it as
//! [`Error::DimensionMismatch`](crate::Error::DimensionMismatch).

use std::borrow::Cow;
use std::fmt;
use std::ops::{Div, Mul, Neg};

use num_complex::Complex64;

/// Exponents over the SI base dimensions used in circuit work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub mass: i8,
    pub length: i8,
    pub time: i8,
    pub current: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0);
    pub const CURRENT: Dimension = Dimension::new(0, 0, 0, 1);
    pub const VOLTAGE: Dimension = Dimension::new(1, 2, -3, -1);
    pub const IMPEDANCE: Dimension = Dimension::new(1, 2, -3, -2);
    pub const ADMITTANCE: Dimension = Dimension::new(-1, -2, 3, 2);
    pub const POWER: Dimension = Dimension::new(1, 2, -3, 0);

    pub const fn new(mass: i8, length: i8, time: i8, current: i8) -> Self {
        Dimension {
            mass,
            length,
            time,
            current,
        }
    }

    pub fn is_dimensionless(self) -> bool {
        self == Dimension::DIMENSIONLESS
    }
}

impl Mul for Dimension {
    type Output = Dimension;
    fn mul(self, rhs: Dimension) -> Dimension {
        Dimension {
            mass: self.mass + rhs.mass,
            length: self.length + rhs.length,
            time: self.time + rhs.time,
            current: self.current + rhs.current,
        }
    }
}

impl Div for Dimension {
    type Output = Dimension;
    fn div(self, rhs: Dimension) -> Dimension {
        Dimension {
            mass: self.mass - rhs.mass,
            length: self.length - rhs.length,
            time: self.time - rhs.time,
            current: self.current - rhs.current,
        }
    }
}

/// A named unit: symbol, scale to coherent SI and dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    pub symbol: Cow<'static, str>,
    pub scale: f64,
    pub dimension: Dimension,
}

impl Unit {
    pub const fn new(symbol: &'static str, scale: f64, dimension: Dimension) -> Self {
        Unit {
            symbol: Cow::Borrowed(symbol),
            scale,
            dimension,
        }
    }

    /// True when both units measure the same physical dimension.
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Factor converting a value in `self` to a value in `other`.
    pub fn factor_to(&self, other: &Unit) -> Option<f64> {
        self.is_compatible(other).then(|| self.scale / other.scale)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol.is_empty() {
            write!(f, "dimensionless")
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

impl Mul for &Unit {
    type Output = Unit;
    fn mul(self, rhs: &Unit) -> Unit {
        let symbol = match (self.symbol.is_empty(), rhs.symbol.is_empty()) {
            (true, _) => rhs.symbol.clone(),
            (_, true) => self.symbol.clone(),
            _ => Cow::Owned(format!("{}·{}", self.symbol, rhs.symbol)),
        };
        Unit {
            symbol,
            scale: self.scale * rhs.scale,
            dimension: self.dimension * rhs.dimension,
        }
    }
}

impl Div for &Unit {
    type Output = Unit;
    fn div(self, rhs: &Unit) -> Unit {
        let symbol = if rhs.symbol.is_empty() {
            self.symbol.clone()
        } else if self.symbol.is_empty() {
            Cow::Owned(format!("1/{}", rhs.symbol))
        } else {
            Cow::Owned(format!("{}/{}", self.symbol, rhs.symbol))
        };
        Unit {
            symbol,
            scale: self.scale / rhs.scale,
            dimension: self.dimension / rhs.dimension,
        }
    }
}

pub const ONE: Unit = Unit::new("", 1.0, Dimension::DIMENSIONLESS);
pub const VOLT: Unit = Unit::new("V", 1.0, Dimension::VOLTAGE);
pub const KILOVOLT: Unit = Unit::new("kV", 1e3, Dimension::VOLTAGE);
pub const MILLIVOLT: Unit = Unit::new("mV", 1e-3, Dimension::VOLTAGE);
pub const AMPERE: Unit = Unit::new("A", 1.0, Dimension::CURRENT);
pub const KILOAMPERE: Unit = Unit::new("kA", 1e3, Dimension::CURRENT);
pub const MILLIAMPERE: Unit = Unit::new("mA", 1e-3, Dimension::CURRENT);
pub const OHM: Unit = Unit::new("Ω", 1.0, Dimension::IMPEDANCE);
pub const KILOOHM: Unit = Unit::new("kΩ", 1e3, Dimension::IMPEDANCE);
pub const SIEMENS: Unit = Unit::new("S", 1.0, Dimension::ADMITTANCE);
pub const WATT: Unit = Unit::new("W", 1.0, Dimension::POWER);
pub const KILOWATT: Unit = Unit::new("kW", 1e3, Dimension::POWER);
pub const VOLT_AMPERE: Unit = Unit::new("VA", 1.0, Dimension::POWER);

/// A number tagged with a unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity<T> {
    pub value: T,
    pub unit: Unit,
}

impl<T> Quantity<T> {
    pub fn new(value: T, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.dimension.is_dimensionless()
    }
}

impl<T: Copy> Quantity<T> {
    /// The raw number in this quantity's own unit.
    pub fn magnitude(&self) -> T {
        self.value
    }
}

impl Quantity<f64> {
    /// Value in coherent SI units.
    pub fn si(&self) -> f64 {
        self.value * self.unit.scale
    }

    /// Convert to another unit of the same dimension.
    pub fn to(&self, unit: &Unit) -> Option<Quantity<f64>> {
        let factor = self.unit.factor_to(unit)?;
        Some(Quantity::new(self.value * factor, unit.clone()))
    }
}

impl Quantity<Complex64> {
    /// Value in coherent SI units.
    pub fn si(&self) -> Complex64 {
        self.value * self.unit.scale
    }

    pub fn re(&self) -> Quantity<f64> {
        Quantity::new(self.value.re, self.unit.clone())
    }

    pub fn im(&self) -> Quantity<f64> {
        Quantity::new(self.value.im, self.unit.clone())
    }

    /// Modulus, in the same unit.
    pub fn abs(&self) -> Quantity<f64> {
        Quantity::new(self.value.norm(), self.unit.clone())
    }

    /// The zero phasor in this quantity's unit.
    pub fn zero_like(&self) -> Quantity<Complex64> {
        Quantity::new(Complex64::new(0.0, 0.0), self.unit.clone())
    }

    /// Convert to another unit of the same dimension.
    pub fn to(&self, unit: &Unit) -> Option<Quantity<Complex64>> {
        let factor = self.unit.factor_to(unit)?;
        Some(Quantity::new(self.value * factor, unit.clone()))
    }

    /// Sum of two phasors, expressed in `self`'s unit.
    pub fn checked_add(&self, rhs: &Quantity<Complex64>) -> Option<Quantity<Complex64>> {
        let factor = rhs.unit.factor_to(&self.unit)?;
        Some(Quantity::new(self.value + rhs.value * factor, self.unit.clone()))
    }

    /// Divide by `reference` and drop the unit.
    ///
    /// `None` when the two do not share a dimension.
    pub fn per_unit(&self, reference: &Quantity<f64>) -> Option<Complex64> {
        if !self.unit.is_compatible(&reference.unit) {
            return None;
        }
        Some(self.si() / reference.si())
    }
}

impl From<f64> for Quantity<f64> {
    fn from(value: f64) -> Self {
        Quantity::new(value, ONE)
    }
}

impl From<Complex64> for Quantity<Complex64> {
    fn from(value: Complex64) -> Self {
        Quantity::new(value, ONE)
    }
}

impl From<f64> for Quantity<Complex64> {
    fn from(value: f64) -> Self {
        Quantity::new(Complex64::new(value, 0.0), ONE)
    }
}

impl From<Quantity<f64>> for Quantity<Complex64> {
    fn from(q: Quantity<f64>) -> Self {
        Quantity::new(Complex64::new(q.value, 0.0), q.unit)
    }
}

impl fmt::Display for Quantity<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol)
        }
    }
}

impl fmt::Display for Quantity<Complex64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "({}) {}", self.value, self.unit.symbol)
        }
    }
}

/// `230.0 * VOLT`
impl Mul<Unit> for f64 {
    type Output = Quantity<f64>;
    fn mul(self, unit: Unit) -> Quantity<f64> {
        Quantity::new(self, unit)
    }
}

/// `Complex64::new(3.0, 4.0) * OHM`
impl Mul<Unit> for Complex64 {
    type Output = Quantity<Complex64>;
    fn mul(self, unit: Unit) -> Quantity<Complex64> {
        Quantity::new(self, unit)
    }
}

impl<T, U> Mul<Quantity<U>> for Quantity<T>
where
    T: Mul<U>,
{
    type Output = Quantity<<T as Mul<U>>::Output>;
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        Quantity::new(self.value * rhs.value, &self.unit * &rhs.unit)
    }
}

impl<T, U> Div<Quantity<U>> for Quantity<T>
where
    T: Div<U>,
{
    type Output = Quantity<<T as Div<U>>::Output>;
    fn div(self, rhs: Quantity<U>) -> Self::Output {
        Quantity::new(self.value / rhs.value, &self.unit / &rhs.unit)
    }
}

impl<T: Neg> Neg for Quantity<T> {
    type Output = Quantity<<T as Neg>::Output>;
    fn neg(self) -> Self::Output {
        Quantity::new(-self.value, self.unit)
    }
}
