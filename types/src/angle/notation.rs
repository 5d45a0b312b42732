//! Parse the whole string representation of an angle:
//! either the decimal number or the sexagesimal notation produced by the `Display`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{
    consts::DEGREE_SIGN, errors::ParseAngleError, format::Notation, sexagesimal::to_decimal,
};

/// Construct regular expression to parse Degree-Minute-Second representation of an angle
fn parse_dms_re(is_ascii: bool) -> String {
    let (deg, min, sec) = if is_ascii {
        ("\\*?", '\'', '"')
    } else {
        ("°", '′', '″')
    };

    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<sign>[-+])?                             # optional sign of the whole angle
        (?P<whole>\d+(?:\.\d+)?)                    # mandatory degree VALUE
        {deg}                                       # degree sign
        (?:\x20?                                    # minutes and seconds group optionally started with the space
            (?P<min>\d+(?:\.\d+)?)                      # minutes VALUE
            {min}                                       # arcminute sign
            (?:\x20?                                    # seconds group optionally started with the space
                (?P<sec>\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)     # seconds VALUE with the optional fraction and exponent
                {sec}                                       # arcsecond sign
            )?                                          # seconds are optional
        )?                                          # minutes and seconds are optional
        $                                           # match the whole line till the end
        "#
    )
}

/// Construct regular expression to parse Hour-Minute-Second representation of an angle
fn parse_hms_re(is_ascii: bool) -> String {
    let (hour, min, sec) = if is_ascii {
        ("\\x20?hr", "'", "\"")
    } else {
        ("ʰ", "ᵐ", "ˢ")
    };

    format!(
        r#"(?x)
        ^
        (?P<sign>[-+])?
        (?P<whole>\d+(?:\.\d+)?)
        (?:
            {hour}
            (?:\x20?
                (?P<min>\d+(?:\.\d+)?)
                {min}
                (?:\x20?
                    (?P<sec>\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)
                    {sec}
                )?
            )?
        |                                           # or the colon-separated form H:M:S
            :(?P<cmin>\d+(?:\.\d+)?)
            (?::(?P<csec>\d+(?:\.\d+)?))?
        )
        $
        "#
    )
}

lazy_static! {
    static ref RE_DMS_UNICODE: Regex =
        Regex::new(&parse_dms_re(false)).expect("Unicode DMS regex is valid");
    static ref RE_DMS_ASCII: Regex =
        Regex::new(&parse_dms_re(true)).expect("ASCII DMS regex is valid");
    static ref RE_HMS_UNICODE: Regex =
        Regex::new(&parse_hms_re(false)).expect("Unicode HMS regex is valid");
    static ref RE_HMS_ASCII: Regex =
        Regex::new(&parse_hms_re(true)).expect("ASCII HMS regex is valid");
}

fn component(capture: &Captures<'_>, names: &[&str]) -> Result<f64, ParseAngleError> {
    let value = names
        .iter()
        .find_map(|name| capture.name(name))
        .map_or("0", |m| m.as_str());
    Ok(value.parse()?)
}

fn parse_sexagesimal(s: &str, notation: Notation) -> Result<f64, ParseAngleError> {
    let (unicode, ascii): (&Regex, &Regex) = match notation {
        Notation::Degrees => (&*RE_DMS_UNICODE, &*RE_DMS_ASCII),
        Notation::Hours => (&*RE_HMS_UNICODE, &*RE_HMS_ASCII),
    };

    let capture = unicode
        .captures(s)
        .or_else(|| ascii.captures(s))
        .ok_or(ParseAngleError::Notation)?;

    let whole = component(&capture, &["whole"])?;
    let minutes = component(&capture, &["min", "cmin"])?;
    let seconds = component(&capture, &["sec", "csec"])?;

    // the sign is applied to the magnitude of the whole triple
    let magnitude = to_decimal(whole, minutes, seconds);
    let is_negative = capture.name("sign").map_or(false, |m| m.as_str() == "-");
    Ok(if is_negative { -magnitude } else { magnitude })
}

/// Parse the decimal degrees (or hours) from the string.
///
/// The plain number is tried first (optionally followed by the degree sign
/// for the degrees notation), then the sexagesimal notation.
/// Infinite values and NaN are not angles.
pub(crate) fn parse_decimal(s: &str, notation: Notation) -> Result<f64, ParseAngleError> {
    let s = s.trim();
    let number = match notation {
        Notation::Degrees => s.strip_suffix(DEGREE_SIGN).unwrap_or(s),
        Notation::Hours => s,
    };

    let value = match number.parse::<f64>() {
        Ok(number) => number,
        Err(_) => parse_sexagesimal(s, notation)?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("Not a finite angle: {s:?}");
        Err(ParseAngleError::Notation)
    }
}
