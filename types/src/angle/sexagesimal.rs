//! Conversion between the sexagesimal (base-60) triple
//! `(degrees or hours, minutes, seconds)` and a single decimal value.
//! <https://en.wikipedia.org/wiki/Sexagesimal>
//!
//! The sign of the triple belongs to its most significant non-zero part,
//! so `(-45, 59, 60)`, `(-45, -59, -60)` and `(-45, -59, 60)` are all the same angle
//! and `(0, -60, 0)` is the negative degree.

use crate::utils::{leading_sign, ToUnsigned};

use super::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
    errors::ParseAngleError,
};

/// Total (signed) number of seconds in the given triple.
///
/// The magnitudes of all the parts are summed up and the sign of the result
/// is taken from the first non-zero part scanning from the most significant.
pub fn degrees_to_seconds(whole: f64, minutes: f64, seconds: f64) -> f64 {
    let sign = leading_sign(&[whole, minutes, seconds]);
    let total = whole.abs() * SECONDS_IN_DEGREE + minutes.abs() * SECONDS_IN_MINUTE + seconds.abs();
    sign * total
}

/// The decimal degrees (or hours) of the given triple
pub fn to_decimal(whole: f64, minutes: f64, seconds: f64) -> f64 {
    degrees_to_seconds(whole, minutes, seconds) / SECONDS_IN_DEGREE
}

/// Parse every part of the triple as a number and convert it into decimal degrees (or hours).
///
/// # Errors
/// Any part which is not a number fails the whole conversion.
pub fn parse_to_decimal(whole: &str, minutes: &str, seconds: &str) -> Result<f64, ParseAngleError> {
    let whole = parse_component(whole)?;
    let minutes = parse_component(minutes)?;
    let seconds = parse_component(seconds)?;
    Ok(to_decimal(whole, minutes, seconds))
}

fn parse_component(token: &str) -> Result<f64, ParseAngleError> {
    Ok(token.trim().parse()?)
}

/// The parts of a decimal value ready to be displayed.
///
/// Only the magnitude is split, the sign is kept separately
/// to be shown once before the most significant part.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SexagesimalParts {
    /// Whole degrees (or hours) of the magnitude
    pub whole: f64,
    /// Whole minutes
    pub minutes: f64,
    /// Seconds with the fraction
    pub seconds: f64,
    /// Whether the original value is less than zero
    pub is_negative: bool,
}

impl SexagesimalParts {
    /// Split the decimal degrees (or hours) into parts
    pub fn from_decimal(value: f64) -> Self {
        let (magnitude, is_positive) = value.unsigned_abs();

        let whole = magnitude.floor();
        let total_minutes = MINUTES_IN_DEGREE * (magnitude - whole);
        let minutes = total_minutes.floor();
        let seconds = SECONDS_IN_MINUTE * (total_minutes - minutes);

        Self {
            whole,
            minutes,
            seconds,
            is_negative: !is_positive,
        }
    }

    /// The whole part with the sign of the value applied
    pub fn signed_whole(&self) -> f64 {
        if self.is_negative {
            -self.whole
        } else {
            self.whole
        }
    }

    /// Assemble the parts back into the decimal value
    pub fn to_decimal(&self) -> f64 {
        let magnitude = to_decimal(self.whole, self.minutes, self.seconds);
        if self.is_negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Split the decimal degrees (or hours) into the parts for the display
pub fn decimal_to_parts(value: f64) -> SexagesimalParts {
    SexagesimalParts::from_decimal(value)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn whole_degrees() {
        assert_eq!(degrees_to_seconds(45.0, 0.0, 0.0), 162_000.0);
        assert_eq!(degrees_to_seconds(-45.0, 0.0, 0.0), -162_000.0);
    }

    #[test]
    fn minutes_carry() {
        assert_eq!(to_decimal(44.0, 59.0, 60.0), 45.0);
        assert_relative_eq!(to_decimal(11.0, 59.0, 0.0) + to_decimal(0.0, 0.0, 60.0), 12.0);
    }

    #[test]
    fn minutes_sign_ignored_with_degrees() {
        assert_eq!(
            degrees_to_seconds(45.0, 60.0, 0.0),
            degrees_to_seconds(45.0, -60.0, 0.0)
        );
    }

    #[test]
    fn seconds_sign_ignored_with_degrees() {
        assert_eq!(
            degrees_to_seconds(45.0, 59.0, 60.0),
            degrees_to_seconds(45.0, 59.0, -60.0)
        );
    }

    #[test]
    fn seconds_sign_ignored_with_minutes() {
        assert_eq!(
            degrees_to_seconds(0.0, 59.0, 60.0),
            degrees_to_seconds(0.0, 59.0, -60.0)
        );
        assert_eq!(
            degrees_to_seconds(0.0, -59.0, 60.0),
            degrees_to_seconds(0.0, -59.0, -60.0)
        );
    }

    #[test]
    fn negative_degrees_propagate() {
        let expected = degrees_to_seconds(-45.0, 59.0, 60.0);
        assert_eq!(expected, degrees_to_seconds(-45.0, -59.0, 60.0));
        assert_eq!(expected, degrees_to_seconds(-45.0, 59.0, -60.0));
        assert_eq!(expected, degrees_to_seconds(-45.0, -59.0, -60.0));
        assert_eq!(expected, -(45.0 * 3600.0 + 59.0 * 60.0 + 60.0));
    }

    #[test]
    fn mixed_sign_is_not_symmetric() {
        assert_ne!(to_decimal(-1.0, 2.0, 0.0), to_decimal(1.0, -2.0, 0.0));
        assert_eq!(to_decimal(1.0, -2.0, -3.0), to_decimal(1.0, 2.0, 3.0));
    }

    #[test]
    fn negative_minutes_only() {
        assert_eq!(to_decimal(0.0, -60.0, 0.0), -1.0);
    }

    #[test]
    fn negative_seconds_only() {
        assert_relative_eq!(to_decimal(0.0, 0.0, -6.1), -6.1 / 3600.0);
    }

    #[test]
    fn parse_triple() {
        assert_eq!(parse_to_decimal("-45", "0", "0").unwrap(), -45.0);
        assert_eq!(parse_to_decimal("0", "-60", "0").unwrap(), -1.0);
        assert_eq!(parse_to_decimal(" 44", "59 ", "60").unwrap(), 45.0);
        assert_relative_eq!(parse_to_decimal("0", "0", "6.1").unwrap(), 6.1 / 3600.0);
    }

    #[test]
    #[should_panic(expected = "Float(ParseFloatError")]
    fn parse_bad_token() {
        let _ = parse_to_decimal("45", "thirty", "0").unwrap();
    }

    #[test]
    #[should_panic(expected = "Float(ParseFloatError")]
    fn parse_empty_token() {
        let _ = parse_to_decimal("45", "", "0").unwrap();
    }

    #[test]
    fn parts_of_positive() {
        let parts = decimal_to_parts(to_decimal(23.0, 26.0, 12.1));
        assert!(!parts.is_negative);
        assert_eq!(parts.whole, 23.0);
        assert_eq!(parts.minutes, 26.0);
        assert_relative_eq!(parts.seconds, 12.1, epsilon = 1e-9);
    }

    #[test]
    fn parts_of_negative() {
        let parts = decimal_to_parts(to_decimal(-23.0, 26.0, 12.1));
        assert!(parts.is_negative);
        assert_eq!(parts.whole, 23.0);
        assert_eq!(parts.signed_whole(), -23.0);
        assert_eq!(parts.minutes, 26.0);
        assert_relative_eq!(parts.seconds, 12.1, epsilon = 1e-9);
    }

    #[test]
    fn parts_of_zero() {
        let parts = decimal_to_parts(0.0);
        assert_eq!(parts, SexagesimalParts::default());
    }

    #[test]
    fn parts_of_small_negative() {
        let parts = decimal_to_parts(-0.5);
        assert!(parts.is_negative);
        assert_eq!(parts.whole, 0.0);
        assert_eq!(parts.minutes, 30.0);
        assert_eq!(parts.seconds, 0.0);
        assert_eq!(parts.to_decimal(), -0.5);
    }

    #[test]
    fn parts_beyond_full_turn() {
        let parts = decimal_to_parts(405.0);
        assert_eq!(parts.whole, 405.0);
        assert_eq!(parts.minutes, 0.0);
        assert_eq!(parts.seconds, 0.0);
    }
}
