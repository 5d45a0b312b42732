use crate::angle::{
    consts::QUARTER_TURN_DEG, limited::sealed::Sealed, AngleRange, LimitedRangeAngle, Notation,
};

/// From the south pole to the north pole: `-90 <= value <= 90` degrees
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DeclinationRange;

impl Sealed for DeclinationRange {}

impl AngleRange for DeclinationRange {
    const MINIMUM: f64 = -QUARTER_TURN_DEG;
    const MAXIMUM: f64 = QUARTER_TURN_DEG;
    const NOTATION: Notation = Notation::Degrees;
}

/// The angle measured north (positive) or south (negative)
/// of the celestial equator.
/// [Read more](https://en.wikipedia.org/wiki/Declination).
pub type Declination = LimitedRangeAngle<DeclinationRange>;

/// The angle between the equatorial plane and the point along the meridian.
/// Shares the range and the arithmetic with the [`Declination`].
/// [Read more](https://en.wikipedia.org/wiki/Latitude).
pub type Latitude = Declination;
