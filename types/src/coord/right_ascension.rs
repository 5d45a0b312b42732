use crate::angle::{
    consts::HOURS_IN_DAY, limited::sealed::Sealed, AngleRange, LimitedRangeAngle, Notation,
};

/// A day of the Earth rotation: `0 <= value <= 24` hours
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RightAscensionRange;

impl Sealed for RightAscensionRange {}

impl AngleRange for RightAscensionRange {
    const MINIMUM: f64 = 0.0;
    const MAXIMUM: f64 = HOURS_IN_DAY;
    const NOTATION: Notation = Notation::Hours;
}

/// The angle measured eastward along the celestial equator
/// from the vernal equinox, in hours.
/// [Read more](https://en.wikipedia.org/wiki/Right_ascension).
///
/// The value is shown as `H hr M' S"`.
/// The radians are computed from the raw value the same way as for the degrees.
pub type RightAscension = LimitedRangeAngle<RightAscensionRange>;

/// Short name for the [`RightAscension`]
pub type Ra = RightAscension;
