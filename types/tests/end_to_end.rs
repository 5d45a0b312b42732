use approx::assert_relative_eq;

use equatorial_types::{
    format_degrees, format_hours, Angle, AngleError, Declination, FullTurn, Latitude,
    LimitedRangeAngle, Longitude, Ra, RangeError, RightAscension,
};

#[test]
fn declination_display() {
    let dec = Declination::new(-23.0, 26.0, 12.1).unwrap();
    assert_eq!(dec.to_string(), "-23* 26' 12.1\"");
    assert_eq!(format_degrees(dec.value()), "-23* 26' 12.1\"");
}

#[test]
fn right_ascension_display() {
    let ra = RightAscension::new(23.0, 26.0, 12.1).unwrap();
    assert_eq!(ra.to_string(), "23 hr 26' 12.1\"");
    assert_eq!(format_hours(ra.value()), "23 hr 26' 12.1\"");
}

#[test]
fn sum_of_equal_angles() {
    let mut a1 = Angle::new(44.0, 59.0, 60.0);
    let a2 = Angle::from_strs("44", "59", "60").unwrap();
    assert_eq!(a1.to_string(), "45* 0' 0\"");
    assert_eq!(a2.to_string(), "45* 0' 0\"");

    a1 += a2;
    assert_relative_eq!(a1.radians().sin(), 1.570_796_326_794_896_6_f64.sin());
    assert_relative_eq!(a1.radians().sin(), 1.0);
}

#[test]
fn right_ascension_carry() {
    let a = Ra::new(11.0, 59.0, 0.0).unwrap();
    let b = Ra::from_strs("0", "0", "60").unwrap();
    let sum = (a + b).unwrap();
    assert_eq!(sum.value(), 12.0);
    assert_eq!(sum.to_string(), "12 hr 0' 0\"");
}

#[test]
fn latitude_out_of_range() {
    let err = Latitude::new(200.0, 0.0, 0.0).unwrap_err();
    assert_eq!(err, RangeError::MaximumExceeded);
    assert_eq!(err.to_string(), "maximum exceeded");
}

#[test]
fn generic_range_boundary() {
    assert!(LimitedRangeAngle::<FullTurn>::new(360.0, 0.0, 0.0).is_ok());

    let err = LimitedRangeAngle::<FullTurn>::new(361.0, 0.0, 0.0).unwrap_err();
    assert_eq!(err, RangeError::MaximumExceeded);
}

#[test]
fn parse_error_is_not_range_error() {
    let err = Declination::from_strs("1", "two", "3").unwrap_err();
    assert!(matches!(err, AngleError::Parse(_)));
    assert!(err.to_string().starts_with("Cannot parse angle: "));
}

#[test]
fn longitude_parse_unicode() {
    let lon: Longitude = "-74° 0′ 21″".parse().unwrap();
    assert_relative_eq!(lon.value(), Longitude::new(-74.0, 0.0, 21.0).unwrap().value());
}

#[test]
fn error_messages() {
    let narrow: LimitedRangeAngle =
        LimitedRangeAngle::with_bounds(1.0, 0.0, 0.0, -90.0, 90.0).unwrap();
    let wide: LimitedRangeAngle =
        LimitedRangeAngle::with_bounds(1.0, 0.0, 0.0, -90.0, 180.0).unwrap();
    let zero: LimitedRangeAngle =
        LimitedRangeAngle::with_bounds(0.0, 0.0, 0.0, -90.0, 90.0).unwrap();

    assert_eq!(
        (narrow - wide).unwrap_err().to_string(),
        "range maximums are not equal"
    );
    assert_eq!(
        (narrow / zero).unwrap_err().to_string(),
        "division by zero is undefined"
    );
    assert_eq!(
        (wide / zero).unwrap_err().to_string(),
        "division by zero is undefined"
    );
}
