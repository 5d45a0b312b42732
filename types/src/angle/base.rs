//! The unconstrained angle: a single decimal value of degrees
//! with the arithmetic which never checks any range.

use std::{
    f64::consts::PI,
    fmt,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use num_traits::Zero;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    consts::{FULL_TURN_DEG, HALF_TURN_DEG},
    errors::{DivideByZeroError, ParseAngleError},
    format::Notation,
    notation::parse_decimal,
    sexagesimal::{parse_to_decimal, to_decimal, SexagesimalParts},
};

/// Angle stored as decimal degrees.
///
/// Equality and ordering compare the raw value,
/// so the angles differing by a full turn are not equal.
#[derive(Debug, PartialEq, PartialOrd, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle {
    value: f64,
}

impl Angle {
    /// Convert degrees to radians
    pub fn deg2rad(deg: f64) -> f64 {
        deg * PI / HALF_TURN_DEG
    }

    /// Convert radians to degrees
    pub fn rad2deg(rad: f64) -> f64 {
        rad * HALF_TURN_DEG / PI
    }

    /// Degree, arc minute, arc second.
    ///
    /// The sign of the angle is the sign of its most significant non-zero part,
    /// e.g. `(0, -60, 0)` is the same as `(-1, 0, 0)`
    /// and `(-1, 2, 3)` is the same as `(-1, -2, -3)`.
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self::with_value(to_decimal(degrees, minutes, seconds))
    }

    /// The angle of the given decimal degrees
    pub const fn with_value(value: f64) -> Self {
        Self { value }
    }

    /// Parse every part separately and construct the angle as with [`Angle::new`].
    ///
    /// # Errors
    /// Some part of the angle is not a number.
    pub fn from_strs(degrees: &str, minutes: &str, seconds: &str) -> Result<Self, ParseAngleError> {
        parse_to_decimal(degrees, minutes, seconds).map(Self::with_value)
    }

    /// Decimal degrees
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Replace the decimal degrees
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// The same angle in radians
    pub fn radians(self) -> f64 {
        Self::deg2rad(self.value)
    }

    /// Replace the value with the given radians (stored as degrees)
    pub fn set_radians(&mut self, radians: f64) {
        self.value = Self::rad2deg(radians);
    }

    /// Degrees, minutes and seconds of the angle for display
    pub fn parts(self) -> SexagesimalParts {
        SexagesimalParts::from_decimal(self.value)
    }

    /// Bring the angle to the complete turn by subtracting full turns
    /// while the value is greater than the full turn.
    ///
    /// Only the values above 360 degrees are changed:
    /// the negative angles stay negative and exactly 360 stays 360.
    ///
    /// The loop makes one step per full turn, so it never returns
    /// for the infinite value and does not make progress for magnitudes
    /// about `1e17` and above, where subtracting 360 leaves the value unchanged.
    pub fn normalize(&mut self) {
        while self.value > FULL_TURN_DEG {
            self.value -= FULL_TURN_DEG;
        }
    }

    /// The copy of the angle passed through [`Angle::normalize`]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Divide the angle by another one.
    ///
    /// # Errors
    /// The divisor is exactly zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, DivideByZeroError> {
        if rhs.is_zero() {
            log::debug!("Refusing to divide {} by zero", self.value);
            return Err(DivideByZeroError);
        }

        Ok(Self::with_value(self.value / rhs.value))
    }

    /// In-place version of [`Angle::checked_div`].
    /// The angle is not changed on failure.
    ///
    /// # Errors
    /// The divisor is exactly zero.
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<(), DivideByZeroError> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }
}

impl Zero for Angle {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::with_value(self.value + rhs.value)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::with_value(self.value - rhs.value)
    }
}

impl Mul for Angle {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::with_value(self.value * rhs.value)
    }
}

impl Div for Angle {
    type Output = Result<Self, DivideByZeroError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::with_value(-self.value)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Angle {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<f64> for Angle {
    fn from(value: f64) -> Self {
        Self::with_value(value)
    }
}

impl From<(f64, f64, f64)> for Angle {
    fn from(value: (f64, f64, f64)) -> Self {
        let (deg, min, sec) = value;
        Self::new(deg, min, sec)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.value
    }
}

impl FromStr for Angle {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s, Notation::Degrees).map(Self::with_value)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Notation::Degrees.write(f, self.value)
    }
}
