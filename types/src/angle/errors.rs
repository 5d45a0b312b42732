use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The value or the operands do not fit the closed range of an angle
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// value < minimum
    MinimumExceeded,
    /// value > maximum
    MaximumExceeded,
    /// the operands were constructed with different minimums
    MinimumsNotEqual,
    /// the operands were constructed with different maximums
    MaximumsNotEqual,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MinimumExceeded => "minimum exceeded",
            Self::MaximumExceeded => "maximum exceeded",
            Self::MinimumsNotEqual => "range minimums are not equal",
            Self::MaximumsNotEqual => "range maximums are not equal",
        };

        write!(f, "{msg}")
    }
}

impl Error for RangeError {}

/// The divisor angle is exactly zero
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DivideByZeroError;

impl fmt::Display for DivideByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "division by zero is undefined")
    }
}

impl Error for DivideByZeroError {}

/// The string does not represent an angle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAngleError {
    /// One of the sexagesimal components is not a number
    Float(ParseFloatError),
    /// Neither a decimal number nor a sexagesimal notation
    Notation,
}

enum_trivial_from_impl!(ParseFloatError => ParseAngleError:Float);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Notation => write!(f, "not a sexagesimal notation"),
        }
    }
}

impl Error for ParseAngleError {}

/// Any failure of constructing or combining the angles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AngleError {
    /// See [`ParseAngleError`]
    Parse(ParseAngleError),
    /// See [`DivideByZeroError`]
    DivideByZero(DivideByZeroError),
    /// See [`RangeError`]
    Range(RangeError),
}

enum_trivial_from_impl!(ParseAngleError => AngleError:Parse);
enum_trivial_from_impl!(DivideByZeroError => AngleError:DivideByZero);
enum_trivial_from_impl!(RangeError => AngleError:Range);

impl From<ParseFloatError> for AngleError {
    fn from(err: ParseFloatError) -> Self {
        Self::Parse(err.into())
    }
}

impl fmt::Display for AngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(inner) => write!(f, "{inner}"),
            Self::DivideByZero(inner) => write!(f, "{inner}"),
            Self::Range(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for AngleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_messages() {
        assert_eq!(RangeError::MinimumExceeded.to_string(), "minimum exceeded");
        assert_eq!(RangeError::MaximumExceeded.to_string(), "maximum exceeded");
        assert_eq!(
            RangeError::MinimumsNotEqual.to_string(),
            "range minimums are not equal"
        );
        assert_eq!(
            RangeError::MaximumsNotEqual.to_string(),
            "range maximums are not equal"
        );
    }

    #[test]
    fn divide_by_zero_message() {
        assert_eq!(
            DivideByZeroError.to_string(),
            "division by zero is undefined"
        );
    }

    #[test]
    fn umbrella_keeps_the_message() {
        let err: AngleError = RangeError::MaximumExceeded.into();
        assert_eq!(err.to_string(), "maximum exceeded");

        let err: AngleError = DivideByZeroError.into();
        assert_eq!(err.to_string(), "division by zero is undefined");
    }

    #[test]
    fn float_error_is_parse_error() {
        let float_err = "x".parse::<f64>().unwrap_err();
        let err: AngleError = float_err.clone().into();
        assert_eq!(err, AngleError::Parse(ParseAngleError::Float(float_err)));
        assert!(err.to_string().starts_with("Cannot parse angle: "));
    }
}
