use crate::angle::{
    consts::HALF_TURN_DEG, limited::sealed::Sealed, AngleRange, LimitedRangeAngle, Notation,
};

/// Half a turn in both directions from the prime meridian:
/// `-180 <= value <= 180` degrees
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LongitudeRange;

impl Sealed for LongitudeRange {}

impl AngleRange for LongitudeRange {
    const MINIMUM: f64 = -HALF_TURN_DEG;
    const MAXIMUM: f64 = HALF_TURN_DEG;
    const NOTATION: Notation = Notation::Degrees;
}

/// The angle measured eastward (positive) or westward (negative)
/// from the prime meridian.
/// [Read more](https://en.wikipedia.org/wiki/Longitude).
pub type Longitude = LimitedRangeAngle<LongitudeRange>;
