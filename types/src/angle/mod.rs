pub use self::{
    base::Angle,
    errors::{AngleError, DivideByZeroError, ParseAngleError, RangeError},
    format::{format_degrees, format_hours, Notation},
    limited::{AngleRange, FullTurn, LimitedRangeAngle},
    sexagesimal::{
        decimal_to_parts, degrees_to_seconds, parse_to_decimal, to_decimal, SexagesimalParts,
    },
};

mod base;
pub(crate) mod consts;
mod errors;
mod format;
pub(crate) mod limited;
mod notation;
mod sexagesimal;
