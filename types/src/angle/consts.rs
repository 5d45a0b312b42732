pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const FULL_TURN_DEG: f64 = 360.0;
pub(crate) const HALF_TURN_DEG: f64 = FULL_TURN_DEG / 2.0;
pub(crate) const QUARTER_TURN_DEG: f64 = HALF_TURN_DEG / 2.0;

pub(crate) const HOURS_IN_DAY: f64 = 24.0;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

pub(crate) const ASCII_DEGREE_SIGN: char = '*';
pub(crate) const ASCII_ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ASCII_ARC_SECOND_SIGN: char = '"';

pub(crate) const HOUR_SIGN: char = 'ʰ';
pub(crate) const MINUTE_SIGN: char = 'ᵐ';
pub(crate) const SECOND_SIGN: char = 'ˢ';

pub(crate) const ASCII_HOUR_SIGN: &str = " hr";
