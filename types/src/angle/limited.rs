//! The angle which value always stays inside the closed range `[minimum, maximum]`.
//!
//! Default bounds come from the type parameter implementing [`AngleRange`],
//! so the angles of different kinds can not be mixed in the arithmetic.
//! Bounds of a single value can still be customized with
//! [`LimitedRangeAngle::with_bounds`], this is why the operands
//! are additionally checked to have the same bounds at runtime.

use std::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

use super::{
    base::Angle,
    consts::FULL_TURN_DEG,
    errors::{AngleError, DivideByZeroError, RangeError},
    format::Notation,
    notation::parse_decimal,
    sexagesimal::{parse_to_decimal, to_decimal, SexagesimalParts},
};

pub(crate) mod sealed {
    /// Only the ranges defined in this crate
    pub trait Sealed {}
}

/// The default bounds and the display notation for a kind of angle.
///
/// This trait is sealed: the set of the angle kinds is fixed by the crate.
/// Every range contains zero, so that the default angle is valid.
pub trait AngleRange: sealed::Sealed + Copy + fmt::Debug + Default {
    /// Lower inclusive bound
    const MINIMUM: f64;
    /// Upper inclusive bound
    const MAXIMUM: f64;
    /// The unit the value is shown in
    const NOTATION: Notation;
}

/// Generic angle from zero to the complete turn
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FullTurn;

impl sealed::Sealed for FullTurn {}

impl AngleRange for FullTurn {
    const MINIMUM: f64 = 0.0;
    const MAXIMUM: f64 = FULL_TURN_DEG;
    const NOTATION: Notation = Notation::Degrees;
}

/// An angle with the value checked against the range
/// on every construction and every operation.
#[derive(Debug, Copy, Clone)]
pub struct LimitedRangeAngle<R: AngleRange = FullTurn> {
    angle: Angle,
    minimum: f64,
    maximum: f64,
    range: PhantomData<R>,
}

fn check_range(value: f64, minimum: f64, maximum: f64) -> Result<(), RangeError> {
    if value < minimum {
        log::debug!("Angle {value} is less than the minimum {minimum}");
        return Err(RangeError::MinimumExceeded);
    }

    // NaN is never inside the range
    if !(value <= maximum) {
        log::debug!("Angle {value} is greater than the maximum {maximum}");
        return Err(RangeError::MaximumExceeded);
    }

    Ok(())
}

impl<R: AngleRange> LimitedRangeAngle<R> {
    fn with_value_and_bounds(value: f64, minimum: f64, maximum: f64) -> Result<Self, RangeError> {
        check_range(value, minimum, maximum)?;
        Ok(Self {
            angle: Angle::with_value(value),
            minimum,
            maximum,
            range: PhantomData,
        })
    }

    /// Degrees (or hours), minutes and seconds within the default range of the kind.
    ///
    /// # Errors
    /// The value is out of the range.
    pub fn new(whole: f64, minutes: f64, seconds: f64) -> Result<Self, RangeError> {
        Self::with_bounds(whole, minutes, seconds, R::MINIMUM, R::MAXIMUM)
    }

    /// Degrees (or hours), minutes and seconds within the custom range.
    ///
    /// # Errors
    /// The value is out of the range.
    pub fn with_bounds(
        whole: f64,
        minutes: f64,
        seconds: f64,
        minimum: f64,
        maximum: f64,
    ) -> Result<Self, RangeError> {
        Self::with_value_and_bounds(to_decimal(whole, minutes, seconds), minimum, maximum)
    }

    /// Parse every part separately and construct the angle within the default range.
    ///
    /// # Errors
    /// Some part is not a number or the value is out of the range.
    pub fn from_strs(whole: &str, minutes: &str, seconds: &str) -> Result<Self, AngleError> {
        Self::from_strs_with_bounds(whole, minutes, seconds, R::MINIMUM, R::MAXIMUM)
    }

    /// Parse every part separately and construct the angle within the custom range.
    ///
    /// # Errors
    /// Some part is not a number or the value is out of the range.
    pub fn from_strs_with_bounds(
        whole: &str,
        minutes: &str,
        seconds: &str,
        minimum: f64,
        maximum: f64,
    ) -> Result<Self, AngleError> {
        let value = parse_to_decimal(whole, minutes, seconds)?;
        Ok(Self::with_value_and_bounds(value, minimum, maximum)?)
    }

    /// Lower inclusive bound
    pub const fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper inclusive bound
    pub const fn maximum(&self) -> f64 {
        self.maximum
    }

    /// The unconstrained view of the angle
    pub const fn angle(&self) -> Angle {
        self.angle
    }

    /// Decimal degrees (or hours)
    pub const fn value(&self) -> f64 {
        self.angle.value()
    }

    /// Replace the value keeping the bounds.
    ///
    /// # Errors
    /// The new value is out of the range. The angle is not changed then.
    pub fn set_value(&mut self, value: f64) -> Result<(), RangeError> {
        check_range(value, self.minimum, self.maximum)?;
        self.angle.set_value(value);
        Ok(())
    }

    /// The value in radians
    pub fn radians(&self) -> f64 {
        self.angle.radians()
    }

    /// Replace the value with the given radians keeping the bounds.
    ///
    /// # Errors
    /// The new value is out of the range. The angle is not changed then.
    pub fn set_radians(&mut self, radians: f64) -> Result<(), RangeError> {
        self.set_value(Angle::rad2deg(radians))
    }

    /// Degrees (or hours), minutes and seconds of the angle for display
    pub fn parts(&self) -> SexagesimalParts {
        self.angle.parts()
    }

    #[allow(clippy::float_cmp)]
    fn check_same_bounds(&self, other: &Self) -> Result<(), RangeError> {
        if self.minimum != other.minimum {
            log::debug!(
                "Cannot combine angles with the minimums {} and {}",
                self.minimum,
                other.minimum
            );
            return Err(RangeError::MinimumsNotEqual);
        }

        if self.maximum != other.maximum {
            log::debug!(
                "Cannot combine angles with the maximums {} and {}",
                self.maximum,
                other.maximum
            );
            return Err(RangeError::MaximumsNotEqual);
        }

        Ok(())
    }

    /// Every binary operation goes through here:
    /// the operands should share the bounds and the result should fit them.
    fn combine(self, rhs: Self, op: impl FnOnce(f64, f64) -> f64) -> Result<Self, RangeError> {
        self.check_same_bounds(&rhs)?;
        let value = op(self.value(), rhs.value());
        Self::with_value_and_bounds(value, self.minimum, self.maximum)
    }

    fn checked_div(self, rhs: Self) -> Result<Self, AngleError> {
        if rhs.value() == 0.0 {
            log::debug!("Refusing to divide {} by zero", self.value());
            return Err(DivideByZeroError.into());
        }

        Ok(self.combine(rhs, |a, b| a / b)?)
    }

    /// In-place addition.
    ///
    /// # Errors
    /// Same as for the `+` operator. The angle is not changed on failure.
    pub fn try_add_assign(&mut self, rhs: Self) -> Result<(), RangeError> {
        *self = (*self + rhs)?;
        Ok(())
    }

    /// In-place subtraction.
    ///
    /// # Errors
    /// Same as for the `-` operator. The angle is not changed on failure.
    pub fn try_sub_assign(&mut self, rhs: Self) -> Result<(), RangeError> {
        *self = (*self - rhs)?;
        Ok(())
    }

    /// In-place multiplication.
    ///
    /// # Errors
    /// Same as for the `*` operator. The angle is not changed on failure.
    pub fn try_mul_assign(&mut self, rhs: Self) -> Result<(), RangeError> {
        *self = (*self * rhs)?;
        Ok(())
    }

    /// In-place division.
    ///
    /// # Errors
    /// Same as for the `/` operator. The angle is not changed on failure.
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<(), AngleError> {
        *self = (*self / rhs)?;
        Ok(())
    }
}

impl<R: AngleRange> Default for LimitedRangeAngle<R> {
    fn default() -> Self {
        Self {
            angle: Angle::default(),
            minimum: R::MINIMUM,
            maximum: R::MAXIMUM,
            range: PhantomData,
        }
    }
}

impl<R: AngleRange> PartialEq for LimitedRangeAngle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.angle == other.angle
    }
}

impl<R: AngleRange> PartialOrd for LimitedRangeAngle<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.angle.partial_cmp(&other.angle)
    }
}

impl<R: AngleRange> Add for LimitedRangeAngle<R> {
    type Output = Result<Self, RangeError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<R: AngleRange> Sub for LimitedRangeAngle<R> {
    type Output = Result<Self, RangeError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<R: AngleRange> Mul for LimitedRangeAngle<R> {
    type Output = Result<Self, RangeError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a * b)
    }
}

impl<R: AngleRange> Div for LimitedRangeAngle<R> {
    type Output = Result<Self, AngleError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl<R: AngleRange> Neg for LimitedRangeAngle<R> {
    type Output = Result<Self, RangeError>;

    fn neg(self) -> Self::Output {
        Self::with_value_and_bounds(-self.value(), self.minimum, self.maximum)
    }
}

impl<R: AngleRange> TryFrom<f64> for LimitedRangeAngle<R> {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::with_value_and_bounds(value, R::MINIMUM, R::MAXIMUM)
    }
}

impl<R: AngleRange> TryFrom<(f64, f64, f64)> for LimitedRangeAngle<R> {
    type Error = RangeError;

    fn try_from(value: (f64, f64, f64)) -> Result<Self, Self::Error> {
        let (whole, minutes, seconds) = value;
        Self::new(whole, minutes, seconds)
    }
}

impl<R: AngleRange> TryFrom<Angle> for LimitedRangeAngle<R> {
    type Error = RangeError;

    fn try_from(angle: Angle) -> Result<Self, Self::Error> {
        Self::try_from(angle.value())
    }
}

impl<R: AngleRange> From<LimitedRangeAngle<R>> for Angle {
    fn from(limited: LimitedRangeAngle<R>) -> Self {
        limited.angle
    }
}

impl<R: AngleRange> FromStr for LimitedRangeAngle<R> {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_decimal(s, R::NOTATION)?;
        Ok(Self::try_from(value)?)
    }
}

impl<R: AngleRange> fmt::Display for LimitedRangeAngle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        R::NOTATION.write(f, self.value())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::{AngleRange, LimitedRangeAngle};

    #[derive(Serialize, Deserialize)]
    #[serde(rename = "LimitedRangeAngle")]
    struct Repr {
        value: f64,
        minimum: f64,
        maximum: f64,
    }

    impl<R: AngleRange> Serialize for LimitedRangeAngle<R> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Repr {
                value: self.value(),
                minimum: self.minimum,
                maximum: self.maximum,
            }
            .serialize(serializer)
        }
    }

    impl<'de, R: AngleRange> Deserialize<'de> for LimitedRangeAngle<R> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let Repr {
                value,
                minimum,
                maximum,
            } = Repr::deserialize(deserializer)?;
            Self::with_value_and_bounds(value, minimum, maximum).map_err(D::Error::custom)
        }
    }
}
