//! Rendering of decimal angles in the sexagesimal notation.
//!
//! Degrees: `-23* 26' 12.1"` (or `-23° 26′ 12.1″` in the alternate form).
//! Hours: `23 hr 26' 12.1"` (or `23ʰ 26ᵐ 12.1ˢ` in the alternate form).
//!
//! The sign only appears before the degrees, never before minutes or seconds.
//! Seconds are shown with up to 6 significant digits without trailing zeros.

use std::fmt;

use super::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, ASCII_ARC_MINUTE_SIGN, ASCII_ARC_SECOND_SIGN,
        ASCII_DEGREE_SIGN, ASCII_HOUR_SIGN, DEGREE_SIGN, HOUR_SIGN, MINUTE_SIGN, SECOND_SIGN,
    },
    sexagesimal::SexagesimalParts,
};

/// Which unit the value of an angle is measured in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    /// Degrees, arc minutes and arc seconds
    Degrees,
    /// Hours, minutes and seconds (right ascension)
    Hours,
}

impl Notation {
    /// Write the value in the notation.
    /// The `f.alternate()` flag switches to the Unicode signs.
    pub(crate) fn write(self, f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
        match self {
            Self::Degrees => write_dms(f, value),
            Self::Hours => write_hms(f, value),
        }
    }
}

const SECONDS_SIGNIFICANT_DIGITS: i32 = 6;

/// Format the number with the given amount of significant digits
/// dropping the trailing zeros in the fraction.
fn significant(value: f64, digits: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).clamp(0, 15);
    let fixed = format!("{value:.prec$}", prec = decimals as usize);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        fixed
    }
}

fn write_dms(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let parts = SexagesimalParts::from_decimal(value);
    let seconds = significant(parts.seconds, SECONDS_SIGNIFICANT_DIGITS);
    let degrees = parts.signed_whole();

    if f.alternate() {
        write!(
            f,
            "{degrees}{DEGREE_SIGN} {}{ARC_MINUTE_SIGN} {seconds}{ARC_SECOND_SIGN}",
            parts.minutes
        )
    } else {
        write!(
            f,
            "{degrees}{ASCII_DEGREE_SIGN} {}{ASCII_ARC_MINUTE_SIGN} {seconds}{ASCII_ARC_SECOND_SIGN}",
            parts.minutes
        )
    }
}

fn write_hms(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let parts = SexagesimalParts::from_decimal(value);
    let seconds = significant(parts.seconds, SECONDS_SIGNIFICANT_DIGITS);
    let hours = parts.signed_whole();

    if f.alternate() {
        write!(
            f,
            "{hours}{HOUR_SIGN} {}{MINUTE_SIGN} {seconds}{SECOND_SIGN}",
            parts.minutes
        )
    } else {
        write!(
            f,
            "{hours}{ASCII_HOUR_SIGN} {}{ASCII_ARC_MINUTE_SIGN} {seconds}{ASCII_ARC_SECOND_SIGN}",
            parts.minutes
        )
    }
}

struct Display {
    notation: Notation,
    value: f64,
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.notation.write(f, self.value)
    }
}

/// Render decimal degrees as `D* M' S"`
pub fn format_degrees(value: f64) -> String {
    Display {
        notation: Notation::Degrees,
        value,
    }
    .to_string()
}

/// Render decimal hours as `H hr M' S"`.
///
/// The sign is shown before the hours only, as for the degrees.
pub fn format_hours(value: f64) -> String {
    Display {
        notation: Notation::Hours,
        value,
    }
    .to_string()
}
